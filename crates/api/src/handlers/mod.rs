//! HTTP handlers, grouped per resource.

pub mod audit;
pub mod blocked_slot;
pub mod booking;
pub mod fixed_offer;
pub mod notification;
pub mod schedule;
pub mod slot_name;
pub mod users;
