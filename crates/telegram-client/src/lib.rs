//! Telegram Bot API client.
//!
//! Long-polling `getUpdates` plus `sendMessage`, which is all the login
//! bot needs. The caller owns the update offset and the polling loop.

pub mod api;

pub use api::{Chat, Message, Update};

/// Unified error type for the telegram-client crate.
#[derive(Debug, thiserror::Error)]
pub enum TelegramError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Telegram API error: {0}")]
    Api(String),
}

/// Telegram Bot API client bound to a single bot token.
#[derive(Clone)]
pub struct TelegramClient {
    http: reqwest::Client,
    token: String,
}
