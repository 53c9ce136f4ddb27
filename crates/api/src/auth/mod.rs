//! Token validation for requests authenticated by the school's SSO portal.

pub mod jwt;
