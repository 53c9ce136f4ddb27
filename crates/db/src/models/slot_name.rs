//! Slot-name entity model and DTOs (admin-managed grid display labels).

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sportoase_core::types::{DbId, Timestamp};

/// A row from the `slot_names` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SlotName {
    pub id: DbId,
    pub weekday: String,
    pub period: i32,
    pub label: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for `POST /admin/slot-names`.
#[derive(Debug, Deserialize)]
pub struct CreateSlotName {
    pub weekday: String,
    pub period: i32,
    pub label: String,
}

/// DTO for `PUT /admin/slot-names/{id}`.
#[derive(Debug, Deserialize)]
pub struct UpdateSlotName {
    pub label: String,
}
