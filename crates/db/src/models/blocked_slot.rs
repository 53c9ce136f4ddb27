//! Blocked-slot entity model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sportoase_core::types::{DbId, Timestamp};

/// A row from the `blocked_slots` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BlockedSlot {
    pub id: DbId,
    pub date: NaiveDate,
    pub period: i32,
    pub weekday: String,
    pub reason: String,
    pub blocked_by_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for `POST /admin/blocked-slots`.
#[derive(Debug, Deserialize)]
pub struct CreateBlockedSlot {
    pub date: NaiveDate,
    pub period: i32,
    /// Defaults to `"Beratung"` when omitted.
    pub reason: Option<String>,
}
