//! Handlers for the `/admin/slot-names` resource.
//!
//! Slot names are free-form display labels an admin can pin to a weekday
//! and period, shown alongside the grid.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use sportoase_core::error::CoreError;
use sportoase_core::periods::is_valid_period;
use sportoase_core::types::DbId;
use sportoase_db::models::slot_name::{CreateSlotName, UpdateSlotName};
use sportoase_db::repositories::SlotNameRepo;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::services::audit;
use crate::state::AppState;

/// Entity type name used in audit entries for slot names.
const ENTITY_SLOT_NAME: &str = "SlotName";

/// GET /api/v1/admin/slot-names
pub async fn list_slot_names(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<serde_json::Value>> {
    let names = SlotNameRepo::list(&state.pool).await?;

    Ok(Json(serde_json::json!({ "data": names })))
}

/// POST /api/v1/admin/slot-names
pub async fn create_slot_name(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateSlotName>,
) -> AppResult<impl IntoResponse> {
    if !is_valid_period(input.period) {
        return Err(CoreError::Validation(format!("Invalid period: {}", input.period)).into());
    }
    if input.label.trim().is_empty() {
        return Err(CoreError::Validation("Label must not be empty".into()).into());
    }

    let name =
        SlotNameRepo::create(&state.pool, &input.weekday, input.period, &input.label).await?;

    audit::record(
        &state.pool,
        ENTITY_SLOT_NAME,
        name.id,
        audit::ACTION_CREATE,
        &admin,
        None,
        format!(
            "Named {} period {} '{}'",
            name.weekday, name.period, name.label
        ),
    )
    .await;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "data": name })),
    ))
}

/// PUT /api/v1/admin/slot-names/{id}
pub async fn update_slot_name(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSlotName>,
) -> AppResult<Json<serde_json::Value>> {
    if input.label.trim().is_empty() {
        return Err(CoreError::Validation("Label must not be empty".into()).into());
    }

    let name = SlotNameRepo::update_label(&state.pool, id, &input.label)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "SlotName",
            id,
        })?;

    audit::record(
        &state.pool,
        ENTITY_SLOT_NAME,
        name.id,
        audit::ACTION_UPDATE,
        &admin,
        None,
        format!("Relabeled slot name {} to '{}'", name.id, name.label),
    )
    .await;

    Ok(Json(serde_json::json!({ "data": name })))
}

/// DELETE /api/v1/admin/slot-names/{id}
pub async fn delete_slot_name(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let removed = SlotNameRepo::delete(&state.pool, id).await?;
    if !removed {
        return Err(CoreError::NotFound {
            entity: "SlotName",
            id,
        }
        .into());
    }

    audit::record(
        &state.pool,
        ENTITY_SLOT_NAME,
        id,
        audit::ACTION_DELETE,
        &admin,
        None,
        format!("Deleted slot name {id}"),
    )
    .await;

    Ok(StatusCode::NO_CONTENT)
}
