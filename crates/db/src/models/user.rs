//! User entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sportoase_core::types::{DbId, Timestamp};

/// A row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub role: String,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a user (admin endpoint and test seeding).
#[derive(Debug, Deserialize)]
pub struct CreateUser {
    pub username: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
    /// Defaults to `"teacher"` when omitted.
    pub role: Option<String>,
}
