//! Repository for the `audit_logs` table.

use sqlx::PgPool;

use crate::models::audit::{AuditLog, AuditQuery, CreateAuditLog};

/// Column list for `audit_logs` SELECT queries.
const COLUMNS: &str = "\
    id, entity_type, entity_id, action, user_id, username, \
    changes, description, ip_address, created_at";

/// Default page size for audit log queries.
const DEFAULT_LIMIT: i64 = 50;

/// Maximum page size for audit log queries.
const MAX_LIMIT: i64 = 200;

/// Provides insert and query operations for audit logs.
pub struct AuditLogRepo;

impl AuditLogRepo {
    /// Insert one audit entry, returning the created row.
    pub async fn create(pool: &PgPool, entry: &CreateAuditLog) -> Result<AuditLog, sqlx::Error> {
        let query = format!(
            "INSERT INTO audit_logs \
                (entity_type, entity_id, action, user_id, username, \
                 changes, description, ip_address) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AuditLog>(&query)
            .bind(&entry.entity_type)
            .bind(entry.entity_id)
            .bind(&entry.action)
            .bind(entry.user_id)
            .bind(&entry.username)
            .bind(&entry.changes)
            .bind(&entry.description)
            .bind(&entry.ip_address)
            .fetch_one(pool)
            .await
    }

    /// Query audit logs with optional entity/action filters and pagination,
    /// newest first.
    pub async fn query(pool: &PgPool, params: &AuditQuery) -> Result<Vec<AuditLog>, sqlx::Error> {
        let limit = params.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
        let offset = params.offset.unwrap_or(0).max(0);
        let query = format!(
            "SELECT {COLUMNS} FROM audit_logs \
             WHERE ($1::text IS NULL OR entity_type = $1) \
               AND ($2::bigint IS NULL OR entity_id = $2) \
               AND ($3::text IS NULL OR action = $3) \
             ORDER BY created_at DESC \
             LIMIT $4 OFFSET $5"
        );
        sqlx::query_as::<_, AuditLog>(&query)
            .bind(&params.entity_type)
            .bind(params.entity_id)
            .bind(&params.action)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }
}
