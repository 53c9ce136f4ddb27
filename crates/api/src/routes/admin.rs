//! Route definitions for the `/admin` tree.
//!
//! Every handler behind these routes takes [`RequireAdmin`], so the role
//! check is enforced at the extractor level rather than by a route layer.
//!
//! [`RequireAdmin`]: crate::middleware::rbac::RequireAdmin

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::{audit, blocked_slot, booking, fixed_offer, notification, slot_name, users};
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// GET    /bookings                                  -> list_all_bookings
///
/// GET    /blocked-slots                             -> list_blocked_slots
/// POST   /blocked-slots                             -> create_blocked_slot
/// DELETE /blocked-slots/{date}/{period}             -> delete_blocked_slot
///
/// GET    /fixed-offers/placements                   -> list_placements
/// PUT    /fixed-offers/placements                   -> upsert_placement
/// DELETE /fixed-offers/placements/{weekday}/{period} -> delete_placement
/// GET    /fixed-offers/names                        -> list_offer_names
/// PUT    /fixed-offers/names/{offer_key}            -> update_offer_name
///
/// GET    /slot-names                                -> list_slot_names
/// POST   /slot-names                                -> create_slot_name
/// PUT    /slot-names/{id}                           -> update_slot_name
/// DELETE /slot-names/{id}                           -> delete_slot_name
///
/// GET    /users                                     -> list_users
/// POST   /users                                     -> create_user
/// POST   /users/{id}/activate                       -> activate_user
/// POST   /users/{id}/deactivate                     -> deactivate_user
///
/// GET    /notifications                             -> list_notifications
/// GET    /notifications/unread-count                -> unread_count
/// POST   /notifications/{id}/read                   -> mark_read
///
/// GET    /audit-logs                                -> list_audit_logs
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/bookings", get(booking::list_all_bookings))
        .route(
            "/blocked-slots",
            get(blocked_slot::list_blocked_slots).post(blocked_slot::create_blocked_slot),
        )
        .route(
            "/blocked-slots/{date}/{period}",
            delete(blocked_slot::delete_blocked_slot),
        )
        .route(
            "/fixed-offers/placements",
            get(fixed_offer::list_placements).put(fixed_offer::upsert_placement),
        )
        .route(
            "/fixed-offers/placements/{weekday}/{period}",
            delete(fixed_offer::delete_placement),
        )
        .route("/fixed-offers/names", get(fixed_offer::list_offer_names))
        .route(
            "/fixed-offers/names/{offer_key}",
            put(fixed_offer::update_offer_name),
        )
        .route(
            "/slot-names",
            get(slot_name::list_slot_names).post(slot_name::create_slot_name),
        )
        .route(
            "/slot-names/{id}",
            put(slot_name::update_slot_name).delete(slot_name::delete_slot_name),
        )
        .route("/users", get(users::list_users).post(users::create_user))
        .route("/users/{id}/activate", post(users::activate_user))
        .route("/users/{id}/deactivate", post(users::deactivate_user))
        .route("/notifications", get(notification::list_notifications))
        .route(
            "/notifications/unread-count",
            get(notification::unread_count),
        )
        .route("/notifications/{id}/read", post(notification::mark_read))
        .route("/audit-logs", get(audit::list_audit_logs))
}
