//! Handlers for the `/bookings` resource.
//!
//! Teachers manage their own bookings here; the admin overview of all
//! bookings is mounted under `/admin/bookings`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use sportoase_core::types::DbId;
use sportoase_db::models::booking::{CreateBooking, UpdateBooking};
use sportoase_db::repositories::BookingRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::services::booking;
use crate::state::AppState;

/// GET /api/v1/bookings
///
/// The authenticated teacher's bookings, newest date first.
pub async fn list_my_bookings(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<serde_json::Value>> {
    let bookings = BookingRepo::list_for_teacher(&state.pool, auth.user_id).await?;

    Ok(Json(serde_json::json!({ "data": bookings })))
}

/// POST /api/v1/bookings
///
/// Create a booking. The full guard sequence runs in the booking service;
/// side effects (calendar, notification, email, audit) are best-effort.
pub async fn create_booking(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateBooking>,
) -> AppResult<impl IntoResponse> {
    input
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let created = booking::create_booking(&state, &auth, input).await?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "data": created })),
    ))
}

/// PATCH /api/v1/bookings/{id}
///
/// Update a booking's mutable fields. Owner or admin only; the slot itself
/// (date and period) never changes through this endpoint.
pub async fn update_booking(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(booking_id): Path<DbId>,
    Json(input): Json<UpdateBooking>,
) -> AppResult<Json<serde_json::Value>> {
    let updated = booking::update_booking(&state, &auth, booking_id, input).await?;

    Ok(Json(serde_json::json!({ "data": updated })))
}

/// DELETE /api/v1/bookings/{id}
///
/// Cancel a booking. Owner or admin only. Returns 204 No Content.
pub async fn delete_booking(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(booking_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    booking::delete_booking(&state, &auth, booking_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/admin/bookings
///
/// All bookings across all teachers, for the admin overview.
pub async fn list_all_bookings(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<serde_json::Value>> {
    let bookings = BookingRepo::list_all(&state.pool).await?;

    Ok(Json(serde_json::json!({ "data": bookings })))
}
