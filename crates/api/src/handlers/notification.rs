//! Handlers for the `/admin/notifications` resource.
//!
//! New-booking notifications land here for the admin dashboard; the
//! unread count drives its badge.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use sportoase_core::error::CoreError;
use sportoase_core::types::DbId;
use sportoase_db::repositories::NotificationRepo;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// Query parameters for `GET /admin/notifications`.
#[derive(Debug, Deserialize)]
pub struct NotificationQuery {
    /// If `true`, return only unread notifications. Defaults to `false`.
    pub unread_only: Option<bool>,
    /// Maximum number of results. Defaults to 50, capped at 200.
    pub limit: Option<i64>,
    /// Number of results to skip. Defaults to 0.
    pub offset: Option<i64>,
}

const DEFAULT_LIMIT: i64 = 50;
const MAX_LIMIT: i64 = 200;

/// GET /api/v1/admin/notifications
pub async fn list_notifications(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<NotificationQuery>,
) -> AppResult<Json<serde_json::Value>> {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
    let offset = params.offset.unwrap_or(0).max(0);
    let unread_only = params.unread_only.unwrap_or(false);

    let notifications = NotificationRepo::list(&state.pool, unread_only, limit, offset).await?;

    Ok(Json(serde_json::json!({ "data": notifications })))
}

/// GET /api/v1/admin/notifications/unread-count
pub async fn unread_count(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<serde_json::Value>> {
    let count = NotificationRepo::unread_count(&state.pool).await?;

    Ok(Json(serde_json::json!({ "data": { "unread": count } })))
}

/// POST /api/v1/admin/notifications/{id}/read
///
/// Mark one notification as read. 204 on success, 404 if unknown.
pub async fn mark_read(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(notification_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let found = NotificationRepo::mark_read(&state.pool, notification_id).await?;
    if !found {
        return Err(CoreError::NotFound {
            entity: "Notification",
            id: notification_id,
        }
        .into());
    }

    Ok(StatusCode::NO_CONTENT)
}
