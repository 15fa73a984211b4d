//! SMTP delivery of OTP codes.
//!
//! Single attempt over implicit-TLS SMTP (port 465); no retry. A failure
//! propagates to the handler and surfaces as a server error.

use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::AppConfig;

#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("Invalid mail address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("Failed to build message: {0}")]
    Build(#[from] lettre::error::Error),

    #[error("SMTP send failed: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}

/// Send the login code to an email address.
pub async fn send_otp_email(config: &AppConfig, to: &str, code: &str) -> Result<(), MailError> {
    let message = Message::builder()
        .from(config.smtp_from.parse::<Mailbox>()?)
        .to(to.parse::<Mailbox>()?)
        .subject("OTP Login")
        .body(format!("Your login code: {code}"))?;

    let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)?
        .credentials(Credentials::new(
            config.smtp_user.clone(),
            config.smtp_password.clone(),
        ))
        .build();

    transport.send(message).await?;
    tracing::info!(to, "OTP mail sent");
    Ok(())
}
