//! Email notification delivery via SMTP.
//!
//! [`Mailer`] wraps the `lettre` async SMTP transport to send a plain-text
//! notification to the facility admin when a booking is created. Delivery is
//! best-effort: errors are logged and swallowed, never surfaced to the
//! teacher as a booking failure. If `SMTP_HOST` is not set,
//! [`EmailConfig::from_env`] returns `None` and no mailer is constructed.

use sportoase_db::models::booking::Booking;

/// Error type for email delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum EmailError {
    /// SMTP transport-level failure (authentication, connection, etc.).
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    /// The recipient or sender address could not be parsed.
    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The MIME message could not be assembled.
    #[error("Email build error: {0}")]
    Build(String),
}

/// Default SMTP port (STARTTLS).
const DEFAULT_SMTP_PORT: u16 = 587;

/// Default sender address when `SMTP_FROM` is not set.
const DEFAULT_FROM_ADDRESS: &str = "noreply@sportoase.local";

/// Configuration for the SMTP mailer.
#[derive(Debug, Clone)]
pub struct EmailConfig {
    /// SMTP server hostname.
    pub smtp_host: String,
    /// SMTP server port (defaults to 587).
    pub smtp_port: u16,
    /// RFC 5322 "From" address.
    pub from_address: String,
    /// Recipient for booking notifications (the facility admin inbox).
    pub admin_address: String,
    /// Optional SMTP username.
    pub smtp_user: Option<String>,
    /// Optional SMTP password.
    pub smtp_password: Option<String>,
}

impl EmailConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` if `SMTP_HOST` or `ADMIN_EMAIL` is not set, signalling
    /// that email delivery is not configured and should be skipped.
    ///
    /// | Variable        | Required | Default                   |
    /// |-----------------|----------|---------------------------|
    /// | `SMTP_HOST`     | yes      | --                        |
    /// | `ADMIN_EMAIL`   | yes      | --                        |
    /// | `SMTP_PORT`     | no       | `587`                     |
    /// | `SMTP_FROM`     | no       | `noreply@sportoase.local` |
    /// | `SMTP_USER`     | no       | --                        |
    /// | `SMTP_PASSWORD` | no       | --                        |
    pub fn from_env() -> Option<Self> {
        let smtp_host = std::env::var("SMTP_HOST").ok()?;
        let admin_address = std::env::var("ADMIN_EMAIL").ok()?;
        Some(Self {
            smtp_host,
            smtp_port: std::env::var("SMTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_SMTP_PORT),
            from_address: std::env::var("SMTP_FROM")
                .unwrap_or_else(|_| DEFAULT_FROM_ADDRESS.to_string()),
            admin_address,
            smtp_user: std::env::var("SMTP_USER").ok(),
            smtp_password: std::env::var("SMTP_PASSWORD").ok(),
        })
    }
}

/// Sends booking notification emails via SMTP.
pub struct Mailer {
    config: EmailConfig,
}

impl Mailer {
    /// Create a new mailer with the given configuration.
    pub fn new(config: EmailConfig) -> Self {
        Self { config }
    }

    /// Send the "new booking" notification to the admin inbox.
    pub async fn send_booking_notification(&self, booking: &Booking) -> Result<(), EmailError> {
        use lettre::{
            message::header::ContentType, transport::smtp::authentication::Credentials,
            AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
        };

        let students = booking
            .students()
            .iter()
            .map(|s| format!("- {} ({})", s.name, s.class))
            .collect::<Vec<_>>()
            .join("\n");

        let body = format!(
            "Neue SportOase Buchung\n\n\
             Datum: {}\n\
             Stunde: {}\n\
             Lehrkraft: {} ({})\n\
             Angebot: {}\n\
             Schueler:\n{}\n",
            booking.date.format("%d.%m.%Y"),
            booking.period,
            booking.teacher_name,
            booking.teacher_class,
            booking.offer_label,
            students
        );

        let email = Message::builder()
            .from(self.config.from_address.parse()?)
            .to(self.config.admin_address.parse()?)
            .subject("Neue SportOase Buchung")
            .header(ContentType::TEXT_PLAIN)
            .body(body)
            .map_err(|e| EmailError::Build(e.to_string()))?;

        let mut transport_builder =
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.config.smtp_host)?
                .port(self.config.smtp_port);

        if let (Some(user), Some(pass)) = (&self.config.smtp_user, &self.config.smtp_password) {
            transport_builder =
                transport_builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }

        transport_builder.build().send(email).await?;
        Ok(())
    }
}
