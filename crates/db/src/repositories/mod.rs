//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod audit_repo;
pub mod blocked_slot_repo;
pub mod booking_repo;
pub mod fixed_offer_repo;
pub mod notification_repo;
pub mod slot_name_repo;
pub mod user_repo;

pub use audit_repo::AuditLogRepo;
pub use blocked_slot_repo::BlockedSlotRepo;
pub use booking_repo::BookingRepo;
pub use fixed_offer_repo::FixedOfferRepo;
pub use notification_repo::NotificationRepo;
pub use slot_name_repo::SlotNameRepo;
pub use user_repo::UserRepo;
