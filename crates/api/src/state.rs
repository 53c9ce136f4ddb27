use std::sync::Arc;

use crate::config::ServerConfig;
use crate::services::calendar::CalendarSync;
use crate::services::mailer::Mailer;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: sportoase_db::DbPool,
    /// Server configuration (booking policy, CORS, JWT).
    pub config: Arc<ServerConfig>,
    /// Calendar-sync collaborator. Best-effort: failures never fail a booking.
    pub calendar: Arc<dyn CalendarSync>,
    /// Email notifier. `None` when SMTP is not configured.
    pub mailer: Option<Arc<Mailer>>,
}
