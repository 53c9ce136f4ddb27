//! Handler for the weekly schedule view.

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::services::schedule;
use crate::state::AppState;

/// Query parameters for `GET /schedule`.
#[derive(Debug, Deserialize)]
pub struct ScheduleQuery {
    /// Week offset relative to the currently shown week. Defaults to 0.
    pub week: Option<i64>,
}

/// GET /api/v1/schedule?week=N
///
/// The full weekly grid the booking page renders from.
pub async fn get_schedule(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<ScheduleQuery>,
) -> AppResult<Json<serde_json::Value>> {
    let week = schedule::compose_week(&state, params.week.unwrap_or(0)).await?;

    Ok(Json(serde_json::json!({ "data": week })))
}
