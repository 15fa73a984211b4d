//! Application services sitting between HTTP handlers and the database.

pub mod mailer;
pub mod otp;
