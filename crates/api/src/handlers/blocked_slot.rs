//! Handlers for the `/admin/blocked-slots` resource.
//!
//! Blocking is admin-only and slot-addressed: a block is identified by its
//! `(date, period)` pair, not by a surrogate ID.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::NaiveDate;
use sportoase_core::error::CoreError;
use sportoase_core::periods::is_valid_period;
use sportoase_core::week::{weekday_index, weekday_name};
use sportoase_db::models::blocked_slot::CreateBlockedSlot;
use sportoase_db::repositories::BlockedSlotRepo;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::services::audit;
use crate::state::AppState;

/// Entity type name used in audit entries for blocked slots.
const ENTITY_BLOCKED_SLOT: &str = "BlockedSlot";

/// Reason stored when the admin does not give one.
const DEFAULT_REASON: &str = "Beratung";

/// GET /api/v1/admin/blocked-slots
///
/// All blocks, newest date first.
pub async fn list_blocked_slots(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<serde_json::Value>> {
    let blocks = BlockedSlotRepo::list_all(&state.pool).await?;

    Ok(Json(serde_json::json!({ "data": blocks })))
}

/// POST /api/v1/admin/blocked-slots
///
/// Block a slot. Blocking a slot that already carries a booking is allowed;
/// the booking stays, but no further ones can be placed. Blocking twice is a
/// 409, surfaced by the unique constraint on `(date, period)`.
pub async fn create_blocked_slot(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateBlockedSlot>,
) -> AppResult<impl IntoResponse> {
    if !is_valid_period(input.period) {
        return Err(CoreError::Validation(format!("Invalid period: {}", input.period)).into());
    }
    if weekday_index(input.date).is_none() {
        return Err(CoreError::Validation(format!(
            "{} is not a school day",
            weekday_name(input.date)
        ))
        .into());
    }

    let reason = input.reason.as_deref().unwrap_or(DEFAULT_REASON);
    let block = BlockedSlotRepo::create(
        &state.pool,
        input.date,
        input.period,
        weekday_name(input.date),
        reason,
        admin.user_id,
    )
    .await?;

    audit::record(
        &state.pool,
        ENTITY_BLOCKED_SLOT,
        block.id,
        audit::ACTION_CREATE,
        &admin,
        Some(serde_json::json!({ "date": block.date, "period": block.period })),
        format!(
            "Blocked {} period {} ({})",
            block.date, block.period, block.reason
        ),
    )
    .await;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "data": block })),
    ))
}

/// DELETE /api/v1/admin/blocked-slots/{date}/{period}
///
/// Unblock a slot. Idempotent: unblocking a slot that carries no block is
/// still 204, so double-submits from the admin UI are harmless.
pub async fn delete_blocked_slot(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path((date, period)): Path<(NaiveDate, i32)>,
) -> AppResult<impl IntoResponse> {
    let block = BlockedSlotRepo::find_by_slot(&state.pool, date, period).await?;
    BlockedSlotRepo::delete_by_slot(&state.pool, date, period).await?;

    if let Some(block) = block {
        audit::record(
            &state.pool,
            ENTITY_BLOCKED_SLOT,
            block.id,
            audit::ACTION_DELETE,
            &admin,
            None,
            format!("Unblocked {} period {}", date, period),
        )
        .await;
    }

    Ok(StatusCode::NO_CONTENT)
}
