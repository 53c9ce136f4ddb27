//! Handlers for the `/admin/fixed-offers` resource.
//!
//! Fixed offers are placed on the weekly grid by `(weekday, period)` and
//! carry an admin-editable display name per offer key.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use sportoase_core::error::CoreError;
use sportoase_core::periods::is_valid_period;
use sportoase_db::models::fixed_offer::{UpdateOfferName, UpsertPlacement};
use sportoase_db::repositories::FixedOfferRepo;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::services::audit;
use crate::state::AppState;

/// Entity type name used in audit entries for placements.
const ENTITY_PLACEMENT: &str = "FixedOfferPlacement";

/// Entity type name used in audit entries for offer names.
const ENTITY_OFFER_NAME: &str = "FixedOfferName";

fn check_cell(weekday: i32, period: i32) -> Result<(), CoreError> {
    if !(1..=5).contains(&weekday) {
        return Err(CoreError::Validation(format!("Invalid weekday: {weekday}")));
    }
    if !is_valid_period(period) {
        return Err(CoreError::Validation(format!("Invalid period: {period}")));
    }
    Ok(())
}

/// GET /api/v1/admin/fixed-offers/placements
pub async fn list_placements(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<serde_json::Value>> {
    let placements = FixedOfferRepo::list_placements(&state.pool).await?;

    Ok(Json(serde_json::json!({ "data": placements })))
}

/// PUT /api/v1/admin/fixed-offers/placements
///
/// Place an offer on a grid cell, replacing whatever was there.
pub async fn upsert_placement(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<UpsertPlacement>,
) -> AppResult<Json<serde_json::Value>> {
    check_cell(input.weekday, input.period)?;

    let registered = FixedOfferRepo::list_names(&state.pool)
        .await?
        .iter()
        .any(|n| n.offer_key == input.offer_key);
    if !registered {
        return Err(
            CoreError::Validation(format!("Unknown offer key: {}", input.offer_key)).into(),
        );
    }

    let placement =
        FixedOfferRepo::upsert_placement(&state.pool, input.weekday, input.period, &input.offer_key)
            .await?;

    audit::record(
        &state.pool,
        ENTITY_PLACEMENT,
        placement.id,
        audit::ACTION_UPDATE,
        &admin,
        Some(serde_json::json!({
            "weekday": placement.weekday,
            "period": placement.period,
            "offer_key": placement.offer_key,
        })),
        format!(
            "Placed offer '{}' on weekday {} period {}",
            placement.offer_key, placement.weekday, placement.period
        ),
    )
    .await;

    Ok(Json(serde_json::json!({ "data": placement })))
}

/// DELETE /api/v1/admin/fixed-offers/placements/{weekday}/{period}
///
/// Clear a grid cell. Idempotent.
pub async fn delete_placement(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path((weekday, period)): Path<(i32, i32)>,
) -> AppResult<impl IntoResponse> {
    check_cell(weekday, period)?;

    let existing = FixedOfferRepo::list_placements(&state.pool)
        .await?
        .into_iter()
        .find(|p| p.weekday == weekday && p.period == period);
    FixedOfferRepo::delete_placement(&state.pool, weekday, period).await?;

    if let Some(placement) = existing {
        audit::record(
            &state.pool,
            ENTITY_PLACEMENT,
            placement.id,
            audit::ACTION_DELETE,
            &admin,
            None,
            format!("Cleared placement on weekday {weekday} period {period}"),
        )
        .await;
    }

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/admin/fixed-offers/names
pub async fn list_offer_names(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<serde_json::Value>> {
    let names = FixedOfferRepo::list_names(&state.pool).await?;

    Ok(Json(serde_json::json!({ "data": names })))
}

/// PUT /api/v1/admin/fixed-offers/names/{offer_key}
///
/// Override the display name shown for an offer key.
pub async fn update_offer_name(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(offer_key): Path<String>,
    Json(input): Json<UpdateOfferName>,
) -> AppResult<Json<serde_json::Value>> {
    let name = FixedOfferRepo::update_custom_name(&state.pool, &offer_key, &input.custom_name)
        .await?
        .ok_or_else(|| CoreError::Validation(format!("Unknown offer key: {offer_key}")))?;

    audit::record(
        &state.pool,
        ENTITY_OFFER_NAME,
        name.id,
        audit::ACTION_UPDATE,
        &admin,
        Some(serde_json::json!({ "custom_name": name.custom_name })),
        format!("Renamed offer '{}' to '{}'", name.offer_key, name.custom_name),
    )
    .await;

    Ok(Json(serde_json::json!({ "data": name })))
}
