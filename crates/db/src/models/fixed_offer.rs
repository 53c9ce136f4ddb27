//! Fixed-offer entity models and DTOs.
//!
//! A *placement* pins a named recurring offer to a `(weekday, period)` cell;
//! a *name* row carries the admin-overridable display name for an offer key.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sportoase_core::types::{DbId, Timestamp};

/// A row from the `fixed_offer_names` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FixedOfferName {
    pub id: DbId,
    pub offer_key: String,
    pub default_name: String,
    pub custom_name: String,
    pub updated_at: Timestamp,
}

/// A row from the `fixed_offer_placements` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FixedOfferPlacement {
    pub id: DbId,
    /// School weekday, Monday = 1 through Friday = 5.
    pub weekday: i32,
    pub period: i32,
    pub offer_key: String,
    pub created_at: Timestamp,
}

/// DTO for `PUT /admin/fixed-offers/placements`.
#[derive(Debug, Deserialize)]
pub struct UpsertPlacement {
    pub weekday: i32,
    pub period: i32,
    pub offer_key: String,
}

/// DTO for `PUT /admin/fixed-offers/names/{offer_key}`.
#[derive(Debug, Deserialize)]
pub struct UpdateOfferName {
    pub custom_name: String,
}
