//! Notification entity model (admin inbox for new bookings).

use serde::Serialize;
use sqlx::FromRow;
use sportoase_core::types::{DbId, Timestamp};

/// A row from the `notifications` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Notification {
    pub id: DbId,
    pub booking_id: DbId,
    pub recipient_role: String,
    pub notification_type: String,
    pub message: String,
    pub metadata_json: Option<serde_json::Value>,
    pub is_read: bool,
    pub read_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

/// Notification type for a freshly created booking.
pub const TYPE_NEW_BOOKING: &str = "new_booking";
