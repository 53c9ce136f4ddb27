//! Repository for the `fixed_offer_names` and `fixed_offer_placements` tables.

use sqlx::PgPool;

use crate::models::fixed_offer::{FixedOfferName, FixedOfferPlacement};

/// Column list for `fixed_offer_names` queries.
const NAME_COLUMNS: &str = "id, offer_key, default_name, custom_name, updated_at";

/// Column list for `fixed_offer_placements` queries.
const PLACEMENT_COLUMNS: &str = "id, weekday, period, offer_key, created_at";

/// Provides lookups and admin mutations for the fixed-offer registry.
pub struct FixedOfferRepo;

impl FixedOfferRepo {
    /// List all placements, ordered by weekday then period.
    pub async fn list_placements(pool: &PgPool) -> Result<Vec<FixedOfferPlacement>, sqlx::Error> {
        let query = format!(
            "SELECT {PLACEMENT_COLUMNS} FROM fixed_offer_placements \
             ORDER BY weekday ASC, period ASC"
        );
        sqlx::query_as::<_, FixedOfferPlacement>(&query)
            .fetch_all(pool)
            .await
    }

    /// The offer key placed at `(weekday, period)`, if any.
    pub async fn placement_key(
        pool: &PgPool,
        weekday: i32,
        period: i32,
    ) -> Result<Option<String>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT offer_key FROM fixed_offer_placements WHERE weekday = $1 AND period = $2",
        )
        .bind(weekday)
        .bind(period)
        .fetch_optional(pool)
        .await
    }

    /// Create or move a placement for a `(weekday, period)` cell.
    pub async fn upsert_placement(
        pool: &PgPool,
        weekday: i32,
        period: i32,
        offer_key: &str,
    ) -> Result<FixedOfferPlacement, sqlx::Error> {
        let query = format!(
            "INSERT INTO fixed_offer_placements (weekday, period, offer_key) \
             VALUES ($1, $2, $3) \
             ON CONFLICT ON CONSTRAINT uq_fixed_offer_placements_weekday_period \
             DO UPDATE SET offer_key = EXCLUDED.offer_key \
             RETURNING {PLACEMENT_COLUMNS}"
        );
        sqlx::query_as::<_, FixedOfferPlacement>(&query)
            .bind(weekday)
            .bind(period)
            .bind(offer_key)
            .fetch_one(pool)
            .await
    }

    /// Remove the placement at `(weekday, period)`. Returns `true` if one
    /// existed.
    pub async fn delete_placement(
        pool: &PgPool,
        weekday: i32,
        period: i32,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM fixed_offer_placements WHERE weekday = $1 AND period = $2")
                .bind(weekday)
                .bind(period)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List all offer names.
    pub async fn list_names(pool: &PgPool) -> Result<Vec<FixedOfferName>, sqlx::Error> {
        let query = format!("SELECT {NAME_COLUMNS} FROM fixed_offer_names ORDER BY offer_key ASC");
        sqlx::query_as::<_, FixedOfferName>(&query)
            .fetch_all(pool)
            .await
    }

    /// The display name for an offer key: the admin override when registered,
    /// otherwise the key itself.
    pub async fn display_name(pool: &PgPool, offer_key: &str) -> Result<String, sqlx::Error> {
        let custom: Option<String> =
            sqlx::query_scalar("SELECT custom_name FROM fixed_offer_names WHERE offer_key = $1")
                .bind(offer_key)
                .fetch_optional(pool)
                .await?;
        Ok(custom.unwrap_or_else(|| offer_key.to_string()))
    }

    /// Override the display name for an offer key.
    ///
    /// Returns `None` if the key is not registered.
    pub async fn update_custom_name(
        pool: &PgPool,
        offer_key: &str,
        custom_name: &str,
    ) -> Result<Option<FixedOfferName>, sqlx::Error> {
        let query = format!(
            "UPDATE fixed_offer_names \
             SET custom_name = $2, updated_at = NOW() \
             WHERE offer_key = $1 \
             RETURNING {NAME_COLUMNS}"
        );
        sqlx::query_as::<_, FixedOfferName>(&query)
            .bind(offer_key)
            .bind(custom_name)
            .fetch_optional(pool)
            .await
    }
}
