use crate::types::DbId;

/// Domain error taxonomy for the booking core.
///
/// Every variant is a request-level, user-displayable failure; none are
/// process-fatal. The API layer maps each variant to an HTTP status and a
/// stable error code.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// Malformed input: missing teacher name/class, empty student list,
    /// out-of-range period, and the like.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Weekend date, or the period starts inside the advance-notice cutoff.
    #[error("Slot is not bookable: {0}")]
    SlotNotBookable(String),

    /// An administrative block is in effect for the slot.
    #[error("Slot is blocked: {reason}")]
    SlotBlocked { reason: String },

    /// The slot is already occupied by another booking (race lost or stale
    /// client state).
    #[error("Slot is already booked")]
    SlotAlreadyBooked,

    /// Too many students in one booking request.
    #[error("Maximum number of students exceeded ({max})")]
    CapacityExceeded { max: usize },

    /// One or more students are already present in the target slot.
    #[error("Students already booked: {}", names.join(", "))]
    DuplicateStudent { names: Vec<String> },

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
