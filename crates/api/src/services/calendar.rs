//! Calendar-sync collaborator interface.
//!
//! The real integration (the school's shared sports-hall calendar) lives
//! outside this service; the backend only needs the two calls below. Sync is
//! best-effort: a `None`/`false` result is logged by the caller and never
//! surfaced as a booking failure.

use async_trait::async_trait;
use sportoase_db::models::booking::Booking;

/// External calendar integration seen from the booking core.
#[async_trait]
pub trait CalendarSync: Send + Sync {
    /// Create a calendar event for a booking. Returns the provider's event
    /// ID, or `None` when the event could not be created.
    async fn create_event(&self, booking: &Booking) -> Option<String>;

    /// Delete a previously created event. Returns `false` on failure.
    async fn delete_event(&self, event_id: &str) -> bool;
}

/// No-op implementation used when no calendar integration is configured.
pub struct NoopCalendar;

#[async_trait]
impl CalendarSync for NoopCalendar {
    async fn create_event(&self, booking: &Booking) -> Option<String> {
        tracing::debug!(
            booking_id = booking.id,
            date = %booking.date,
            period = booking.period,
            "Calendar sync disabled; skipping event creation"
        );
        None
    }

    async fn delete_event(&self, event_id: &str) -> bool {
        tracing::debug!(event_id, "Calendar sync disabled; skipping event deletion");
        true
    }
}
