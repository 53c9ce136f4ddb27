//! Pure booking domain logic for the SportOase facility-booking backend.
//!
//! This crate has zero internal dependencies so it can be used by the
//! API/repository layer and any future CLI or worker tooling. It contains:
//!
//! - [`periods`]: the static slot catalog (6 school periods, Mon-Fri).
//! - [`booking`]: the booking validator: guard checks for bookability,
//!   blocks, occupancy, capacity and duplicate students.
//! - [`week`]: school-week window arithmetic (Monday-of-week, roll-forward).
//! - [`offers`]: fixed/free offer type literals and default module names.
//! - [`error`]: the domain error taxonomy surfaced to API clients.

pub mod booking;
pub mod error;
pub mod offers;
pub mod periods;
pub mod roles;
pub mod types;
pub mod week;
