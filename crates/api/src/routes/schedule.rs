//! Route definitions for the `/schedule` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::schedule;
use crate::state::AppState;

/// Routes mounted at `/schedule`.
///
/// ```text
/// GET /?week=N -> get_schedule
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(schedule::get_schedule))
}
