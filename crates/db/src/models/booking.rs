//! Booking entity model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sportoase_core::booking::Student;
use sportoase_core::types::{DbId, Timestamp};
use validator::Validate;

/// A row from the `bookings` table.
///
/// The student list is stored as JSONB; [`Booking::students`] decodes it.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Booking {
    pub id: DbId,
    pub date: NaiveDate,
    pub period: i32,
    pub weekday: String,
    pub teacher_id: DbId,
    pub teacher_name: String,
    pub teacher_class: String,
    pub students_json: serde_json::Value,
    pub offer_type: String,
    pub offer_label: String,
    pub calendar_event_id: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Booking {
    /// Decode the stored student list. Rows written by this service always
    /// decode cleanly; anything else yields an empty list.
    pub fn students(&self) -> Vec<Student> {
        serde_json::from_value(self.students_json.clone()).unwrap_or_default()
    }
}

/// DTO for `POST /bookings`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateBooking {
    pub date: NaiveDate,
    pub period: i32,
    #[validate(length(min = 1, max = 255))]
    pub teacher_name: String,
    #[validate(length(min = 1, max = 255))]
    pub teacher_class: String,
    pub students: Vec<Student>,
    /// Label for free bookings. Ignored for fixed-offer slots, whose label
    /// comes from the placement's display name.
    pub offer_label: Option<String>,
}

/// DTO for `PATCH /bookings/{id}`. All fields optional.
#[derive(Debug, Deserialize)]
pub struct UpdateBooking {
    pub teacher_name: Option<String>,
    pub teacher_class: Option<String>,
    pub students: Option<Vec<Student>>,
    pub offer_label: Option<String>,
}
