pub mod admin;
pub mod booking;
pub mod health;
pub mod schedule;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /schedule                                weekly grid (auth required)
///
/// /bookings                                list own, create
/// /bookings/{id}                           update, cancel (owner or admin)
///
/// /admin/bookings                          all bookings
/// /admin/blocked-slots                     list, block
/// /admin/blocked-slots/{date}/{period}     unblock
/// /admin/fixed-offers/placements           list, place
/// /admin/fixed-offers/placements/{wd}/{p}  clear
/// /admin/fixed-offers/names                list
/// /admin/fixed-offers/names/{offer_key}    rename
/// /admin/slot-names                        list, create
/// /admin/slot-names/{id}                   update, delete
/// /admin/users                             list, create
/// /admin/users/{id}/activate               reactivate
/// /admin/users/{id}/deactivate             deactivate
/// /admin/notifications                     list (?unread_only, limit, offset)
/// /admin/notifications/unread-count        badge count
/// /admin/notifications/{id}/read           mark read
/// /admin/audit-logs                        query trail
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Weekly schedule grid.
        .nest("/schedule", schedule::router())
        // Teacher-facing booking management.
        .nest("/bookings", booking::router())
        // Admin tree (blocked slots, fixed offers, slot names, users,
        // notifications, audit trail).
        .nest("/admin", admin::router())
}
