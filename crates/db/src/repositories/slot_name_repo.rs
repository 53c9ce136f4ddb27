//! Repository for the `slot_names` table.

use sqlx::PgPool;
use sportoase_core::types::DbId;

use crate::models::slot_name::SlotName;

/// Column list for `slot_names` queries.
const COLUMNS: &str = "id, weekday, period, label, created_at, updated_at";

/// Provides CRUD operations for admin-managed slot display labels.
pub struct SlotNameRepo;

impl SlotNameRepo {
    /// Insert a slot name, returning the created row. Duplicate
    /// `(weekday, period)` pairs fail on `uq_slot_names_weekday_period`.
    pub async fn create(
        pool: &PgPool,
        weekday: &str,
        period: i32,
        label: &str,
    ) -> Result<SlotName, sqlx::Error> {
        let query = format!(
            "INSERT INTO slot_names (weekday, period, label) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SlotName>(&query)
            .bind(weekday)
            .bind(period)
            .bind(label)
            .fetch_one(pool)
            .await
    }

    /// List all slot names.
    pub async fn list(pool: &PgPool) -> Result<Vec<SlotName>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM slot_names ORDER BY weekday ASC, period ASC");
        sqlx::query_as::<_, SlotName>(&query).fetch_all(pool).await
    }

    /// Update a slot name's label. Returns `None` if the row does not exist.
    pub async fn update_label(
        pool: &PgPool,
        id: DbId,
        label: &str,
    ) -> Result<Option<SlotName>, sqlx::Error> {
        let query = format!(
            "UPDATE slot_names SET label = $2, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SlotName>(&query)
            .bind(id)
            .bind(label)
            .fetch_optional(pool)
            .await
    }

    /// Delete a slot name by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM slot_names WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
