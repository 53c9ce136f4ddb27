//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod audit;
pub mod blocked_slot;
pub mod booking;
pub mod fixed_offer;
pub mod notification;
pub mod slot_name;
pub mod user;
