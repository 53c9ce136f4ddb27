//! Handler for the `/admin/audit-logs` resource.

use axum::extract::{Query, State};
use axum::Json;
use sportoase_db::models::audit::AuditQuery;
use sportoase_db::repositories::AuditLogRepo;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// GET /api/v1/admin/audit-logs
///
/// Query the audit trail, newest first, filtered by entity type, entity id
/// and action. Limit defaults and caps live in the repository.
pub async fn list_audit_logs(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<AuditQuery>,
) -> AppResult<Json<serde_json::Value>> {
    let entries = AuditLogRepo::query(&state.pool, &params).await?;

    Ok(Json(serde_json::json!({ "data": entries })))
}
