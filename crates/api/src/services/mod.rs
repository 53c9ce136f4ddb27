//! Application services: booking orchestration and the best-effort
//! collaborators (calendar sync, email, audit trail).

pub mod audit;
pub mod booking;
pub mod calendar;
pub mod mailer;
pub mod schedule;
