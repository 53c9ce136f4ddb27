//! Audit-log entity model and query parameters.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sportoase_core::types::{DbId, Timestamp};

/// A row from the `audit_logs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AuditLog {
    pub id: DbId,
    pub entity_type: String,
    pub entity_id: DbId,
    pub action: String,
    pub user_id: DbId,
    pub username: String,
    pub changes: Option<serde_json::Value>,
    pub description: Option<String>,
    pub ip_address: Option<String>,
    pub created_at: Timestamp,
}

/// Fields for inserting one audit entry.
#[derive(Debug, Clone)]
pub struct CreateAuditLog {
    pub entity_type: String,
    pub entity_id: DbId,
    pub action: String,
    pub user_id: DbId,
    pub username: String,
    pub changes: Option<serde_json::Value>,
    pub description: Option<String>,
    pub ip_address: Option<String>,
}

/// Filter/pagination parameters for `GET /admin/audit-logs`.
#[derive(Debug, Deserialize)]
pub struct AuditQuery {
    pub entity_type: Option<String>,
    pub entity_id: Option<DbId>,
    pub action: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
