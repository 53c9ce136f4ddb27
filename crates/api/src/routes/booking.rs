//! Route definitions for the `/bookings` resource.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::booking;
use crate::state::AppState;

/// Routes mounted at `/bookings`.
///
/// ```text
/// GET    /       -> list_my_bookings
/// POST   /       -> create_booking
/// PATCH  /{id}   -> update_booking
/// DELETE /{id}   -> delete_booking
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(booking::list_my_bookings).post(booking::create_booking),
        )
        .route(
            "/{id}",
            patch(booking::update_booking).delete(booking::delete_booking),
        )
}
