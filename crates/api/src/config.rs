use sportoase_core::booking::{BookingPolicy, DEFAULT_ADVANCE_MINUTES, DEFAULT_MAX_STUDENTS};

use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret have defaults suitable for local
/// development; in production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// JWT token configuration (secret, expiry).
    pub jwt: JwtConfig,
    /// Booking rules (capacity, advance-notice threshold).
    pub booking: BookingPolicy,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Default                 |
    /// |----------------------------|-------------------------|
    /// | `HOST`                     | `0.0.0.0`               |
    /// | `PORT`                     | `3000`                  |
    /// | `CORS_ORIGINS`             | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS`     | `30`                    |
    /// | `MAX_STUDENTS_PER_BOOKING` | `5`                     |
    /// | `BOOKING_ADVANCE_MINUTES`  | `60`                    |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let max_students_per_booking: usize = std::env::var("MAX_STUDENTS_PER_BOOKING")
            .unwrap_or_else(|_| DEFAULT_MAX_STUDENTS.to_string())
            .parse()
            .expect("MAX_STUDENTS_PER_BOOKING must be a valid usize");

        let advance_minutes: i64 = std::env::var("BOOKING_ADVANCE_MINUTES")
            .unwrap_or_else(|_| DEFAULT_ADVANCE_MINUTES.to_string())
            .parse()
            .expect("BOOKING_ADVANCE_MINUTES must be a valid i64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            jwt: JwtConfig::from_env(),
            booking: BookingPolicy {
                max_students_per_booking,
                advance_minutes,
            },
        }
    }
}
