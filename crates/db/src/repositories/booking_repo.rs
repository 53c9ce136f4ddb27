//! Repository for the `bookings` table.

use chrono::NaiveDate;
use sqlx::PgPool;
use sportoase_core::booking::Student;
use sportoase_core::types::DbId;

use crate::models::booking::{Booking, UpdateBooking};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, date, period, weekday, teacher_id, teacher_name, teacher_class, \
    students_json, offer_type, offer_label, calendar_event_id, \
    created_at, updated_at";

/// Fields for inserting one booking row; assembled by the booking service
/// after all guards have passed.
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub date: NaiveDate,
    pub period: i32,
    pub weekday: String,
    pub teacher_id: DbId,
    pub teacher_name: String,
    pub teacher_class: String,
    pub students: Vec<Student>,
    pub offer_type: String,
    pub offer_label: String,
}

/// Provides CRUD operations for bookings.
pub struct BookingRepo;

impl BookingRepo {
    /// Insert a new booking, returning the created row.
    ///
    /// A concurrent insert into the same slot fails on
    /// `uq_bookings_date_period`; the API layer maps that violation to
    /// "slot already booked".
    pub async fn create(pool: &PgPool, input: &NewBooking) -> Result<Booking, sqlx::Error> {
        let students_json =
            serde_json::to_value(&input.students).unwrap_or_else(|_| serde_json::json!([]));
        let query = format!(
            "INSERT INTO bookings \
                (date, period, weekday, teacher_id, teacher_name, teacher_class, \
                 students_json, offer_type, offer_label) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(input.date)
            .bind(input.period)
            .bind(&input.weekday)
            .bind(input.teacher_id)
            .bind(&input.teacher_name)
            .bind(&input.teacher_class)
            .bind(students_json)
            .bind(&input.offer_type)
            .bind(&input.offer_label)
            .fetch_one(pool)
            .await
    }

    /// Find a booking by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Booking>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bookings WHERE id = $1");
        sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the booking occupying a slot, if any. The unique constraint on
    /// `(date, period)` guarantees at most one row.
    pub async fn find_by_slot(
        pool: &PgPool,
        date: NaiveDate,
        period: i32,
    ) -> Result<Option<Booking>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bookings WHERE date = $1 AND period = $2");
        sqlx::query_as::<_, Booking>(&query)
            .bind(date)
            .bind(period)
            .fetch_optional(pool)
            .await
    }

    /// List all bookings in a date range (inclusive), ordered by date then
    /// period. Used by the weekly view composer.
    pub async fn list_in_range(
        pool: &PgPool,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Booking>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM bookings \
             WHERE date >= $1 AND date <= $2 \
             ORDER BY date ASC, period ASC"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(from)
            .bind(to)
            .fetch_all(pool)
            .await
    }

    /// List a teacher's bookings, most recent date first.
    pub async fn list_for_teacher(
        pool: &PgPool,
        teacher_id: DbId,
    ) -> Result<Vec<Booking>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM bookings \
             WHERE teacher_id = $1 \
             ORDER BY date DESC, period ASC"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(teacher_id)
            .fetch_all(pool)
            .await
    }

    /// List all bookings for the admin dashboard, most recent date first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Booking>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bookings ORDER BY date DESC, period ASC");
        sqlx::query_as::<_, Booking>(&query).fetch_all(pool).await
    }

    /// Update a booking. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBooking,
    ) -> Result<Option<Booking>, sqlx::Error> {
        let students_json = input
            .students
            .as_ref()
            .map(|s| serde_json::to_value(s).unwrap_or_else(|_| serde_json::json!([])));
        let query = format!(
            "UPDATE bookings SET \
                teacher_name = COALESCE($2, teacher_name), \
                teacher_class = COALESCE($3, teacher_class), \
                students_json = COALESCE($4, students_json), \
                offer_label = COALESCE($5, offer_label), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .bind(&input.teacher_name)
            .bind(&input.teacher_class)
            .bind(students_json)
            .bind(&input.offer_label)
            .fetch_optional(pool)
            .await
    }

    /// Attach (or clear) the synced calendar event ID.
    pub async fn set_calendar_event_id(
        pool: &PgPool,
        id: DbId,
        event_id: Option<&str>,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE bookings SET calendar_event_id = $2, updated_at = NOW() WHERE id = $1")
            .bind(id)
            .bind(event_id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Delete a booking by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM bookings WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
