//! Repository for the `notifications` table.

use sqlx::PgPool;
use sportoase_core::types::DbId;

use crate::models::notification::Notification;

/// Column list for `notifications` queries.
const COLUMNS: &str = "\
    id, booking_id, recipient_role, notification_type, message, \
    metadata_json, is_read, read_at, created_at";

/// Provides CRUD operations for the admin notification inbox.
pub struct NotificationRepo;

impl NotificationRepo {
    /// Create a notification, returning the generated ID.
    pub async fn create(
        pool: &PgPool,
        booking_id: DbId,
        notification_type: &str,
        message: &str,
        metadata: Option<&serde_json::Value>,
    ) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO notifications (booking_id, notification_type, message, metadata_json) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id",
        )
        .bind(booking_id)
        .bind(notification_type)
        .bind(message)
        .bind(metadata)
        .fetch_one(pool)
        .await
    }

    /// List notifications, newest first.
    ///
    /// When `unread_only` is `true`, only notifications with `is_read = false`
    /// are returned.
    pub async fn list(
        pool: &PgPool,
        unread_only: bool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Notification>, sqlx::Error> {
        let filter = if unread_only {
            "WHERE is_read = false"
        } else {
            ""
        };
        let query = format!(
            "SELECT {COLUMNS} FROM notifications {filter} \
             ORDER BY created_at DESC \
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Mark a single notification as read.
    ///
    /// Returns `true` if the notification was found and updated, `false`
    /// otherwise.
    pub async fn mark_read(pool: &PgPool, notification_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE notifications \
             SET is_read = true, read_at = NOW() \
             WHERE id = $1 AND is_read = false",
        )
        .bind(notification_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// The number of unread notifications.
    pub async fn unread_count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let count: Option<i64> =
            sqlx::query_scalar("SELECT COUNT(*) FROM notifications WHERE is_read = false")
                .fetch_one(pool)
                .await?;
        Ok(count.unwrap_or(0))
    }
}
