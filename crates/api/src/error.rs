use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use sportoase_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `sportoase_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => classify_core_error(core),
            AppError::Database(err) => classify_sqlx_error(err),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Map a domain error to an HTTP status, stable error code, and message.
///
/// All booking-guard failures are 4xx responses the client can display
/// verbatim; none leak as a generic 500.
fn classify_core_error(core: &CoreError) -> (StatusCode, &'static str, String) {
    match core {
        CoreError::NotFound { entity, id } => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            format!("{entity} with id {id} not found"),
        ),
        CoreError::Validation(msg) => {
            (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
        }
        CoreError::SlotNotBookable(msg) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            "SLOT_NOT_BOOKABLE",
            msg.clone(),
        ),
        CoreError::SlotBlocked { reason } => (
            StatusCode::CONFLICT,
            "SLOT_BLOCKED",
            format!("This slot is blocked: {reason}"),
        ),
        CoreError::SlotAlreadyBooked => (
            StatusCode::CONFLICT,
            "SLOT_ALREADY_BOOKED",
            "This slot is already booked".to_string(),
        ),
        CoreError::CapacityExceeded { max } => (
            StatusCode::UNPROCESSABLE_ENTITY,
            "CAPACITY_EXCEEDED",
            format!("Maximum number of students exceeded ({max})"),
        ),
        CoreError::DuplicateStudent { names } => (
            StatusCode::CONFLICT,
            "DUPLICATE_STUDENT",
            format!("Students already booked: {}", names.join(", ")),
        ),
        CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
        CoreError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone()),
        CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN", msg.clone()),
        CoreError::Internal(msg) => {
            tracing::error!(error = %msg, "Internal core error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// The slot-occupancy pre-checks in the booking service are read-then-write
/// and therefore racy; the unique constraints are the authoritative conflict
/// signal, so their violations (Postgres error 23505) get mapped back to the
/// matching domain error here.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            if db_err.code().as_deref() == Some("23505") {
                match db_err.constraint() {
                    Some("uq_bookings_date_period") => {
                        return classify_core_error(&CoreError::SlotAlreadyBooked);
                    }
                    Some("uq_blocked_slots_date_period") => {
                        return classify_core_error(&CoreError::Conflict(
                            "This slot is already blocked".to_string(),
                        ));
                    }
                    Some(constraint) if constraint.starts_with("uq_") => {
                        return (
                            StatusCode::CONFLICT,
                            "CONFLICT",
                            format!("Duplicate value violates unique constraint: {constraint}"),
                        );
                    }
                    _ => {}
                }
            }
            tracing::error!(error = %db_err, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}
