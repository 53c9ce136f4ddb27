//! Audit trail writes for mutating operations.
//!
//! Every create/update/delete records an entry. The write itself is
//! non-fatal to the caller: a failed audit insert is logged server-side but
//! never rolls back or fails the operation being audited.

use sportoase_core::types::DbId;
use sportoase_db::models::audit::CreateAuditLog;
use sportoase_db::repositories::AuditLogRepo;
use sportoase_db::DbPool;

use crate::middleware::auth::AuthUser;

/// Action name for entity creation.
pub const ACTION_CREATE: &str = "create";
/// Action name for entity updates.
pub const ACTION_UPDATE: &str = "update";
/// Action name for entity deletion.
pub const ACTION_DELETE: &str = "delete";

/// Record one audit entry for a mutating operation.
pub async fn record(
    pool: &DbPool,
    entity_type: &str,
    entity_id: DbId,
    action: &str,
    user: &AuthUser,
    changes: Option<serde_json::Value>,
    description: String,
) {
    let entry = CreateAuditLog {
        entity_type: entity_type.to_string(),
        entity_id,
        action: action.to_string(),
        user_id: user.user_id,
        username: user.username.clone(),
        changes,
        description: Some(description),
        ip_address: None,
    };

    if let Err(err) = AuditLogRepo::create(pool, &entry).await {
        tracing::error!(
            error = %err,
            entity_type,
            entity_id,
            action,
            "Failed to write audit log entry"
        );
    }
}
