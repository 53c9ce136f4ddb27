/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Booking dates are calendar days without a time component.
pub type SchoolDate = chrono::NaiveDate;
