//! Repository for the `blocked_slots` table.

use chrono::NaiveDate;
use sqlx::PgPool;
use sportoase_core::types::DbId;

use crate::models::blocked_slot::BlockedSlot;

/// Column list for `blocked_slots` queries.
const COLUMNS: &str =
    "id, date, period, weekday, reason, blocked_by_id, created_at, updated_at";

/// Provides CRUD operations for administrative slot blocks.
pub struct BlockedSlotRepo;

impl BlockedSlotRepo {
    /// Insert a block for a slot, returning the created row.
    ///
    /// A second block for the same `(date, period)` fails on
    /// `uq_blocked_slots_date_period`; callers must treat the violation as a
    /// conflict, not retry.
    pub async fn create(
        pool: &PgPool,
        date: NaiveDate,
        period: i32,
        weekday: &str,
        reason: &str,
        blocked_by_id: DbId,
    ) -> Result<BlockedSlot, sqlx::Error> {
        let query = format!(
            "INSERT INTO blocked_slots (date, period, weekday, reason, blocked_by_id) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BlockedSlot>(&query)
            .bind(date)
            .bind(period)
            .bind(weekday)
            .bind(reason)
            .bind(blocked_by_id)
            .fetch_one(pool)
            .await
    }

    /// Find the block covering a slot, if any.
    pub async fn find_by_slot(
        pool: &PgPool,
        date: NaiveDate,
        period: i32,
    ) -> Result<Option<BlockedSlot>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM blocked_slots WHERE date = $1 AND period = $2");
        sqlx::query_as::<_, BlockedSlot>(&query)
            .bind(date)
            .bind(period)
            .fetch_optional(pool)
            .await
    }

    /// List blocks in a date range (inclusive), for the weekly view.
    pub async fn list_in_range(
        pool: &PgPool,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<BlockedSlot>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM blocked_slots \
             WHERE date >= $1 AND date <= $2 \
             ORDER BY date ASC, period ASC"
        );
        sqlx::query_as::<_, BlockedSlot>(&query)
            .bind(from)
            .bind(to)
            .fetch_all(pool)
            .await
    }

    /// List all blocks, most recent date first (admin management view).
    pub async fn list_all(pool: &PgPool) -> Result<Vec<BlockedSlot>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM blocked_slots ORDER BY date DESC, period ASC");
        sqlx::query_as::<_, BlockedSlot>(&query).fetch_all(pool).await
    }

    /// Remove the block for a slot. Idempotent: returns `false` when no
    /// block existed.
    pub async fn delete_by_slot(
        pool: &PgPool,
        date: NaiveDate,
        period: i32,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM blocked_slots WHERE date = $1 AND period = $2")
            .bind(date)
            .bind(period)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
