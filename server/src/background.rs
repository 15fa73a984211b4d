//! Background task loops: Telegram long-poll listener and per-chat OTP
//! push loops.

use std::time::Duration;

use telegram_client::TelegramClient;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;

use crate::app::SharedState;
use crate::services;

/// Seconds between pushed codes, matching the code lifetime.
const PUSH_INTERVAL_SECS: u64 = 60;

/// Server-side long-poll timeout for getUpdates.
const POLL_TIMEOUT_SECS: u64 = 50;

async fn sleep_or_cancel(token: &CancellationToken, duration: Duration) -> bool {
    tokio::select! {
        _ = token.cancelled() => true,
        _ = sleep(duration) => false,
    }
}

/// Long-poll the Telegram Bot API for incoming messages.
///
/// A `/start` command subscribes the chat to an OTP push loop. Subscription
/// state is in-memory only and lost on restart.
pub async fn telegram_poll_loop(state: SharedState) {
    let token = { state.config().await.telegram_bot_token.clone() };
    if token.is_empty() {
        tracing::info!("Telegram poll loop not started (no bot token)");
        return;
    }
    let client = TelegramClient::new(token);
    let shutdown_token = state.shutdown_token().clone();

    let mut offset: i64 = 0;
    loop {
        let updates = tokio::select! {
            _ = shutdown_token.cancelled() => {
                tracing::info!("Telegram poll loop stopped (shutdown)");
                return;
            }
            result = client.get_updates(offset, POLL_TIMEOUT_SECS) => match result {
                Ok(updates) => updates,
                Err(e) => {
                    tracing::warn!("Telegram getUpdates failed: {e}");
                    if sleep_or_cancel(&shutdown_token, Duration::from_secs(5)).await {
                        tracing::info!("Telegram poll loop stopped (shutdown)");
                        return;
                    }
                    continue;
                }
            },
        };

        for update in updates {
            offset = offset.max(update.update_id + 1);
            let Some(message) = update.message else {
                continue;
            };
            if message.text.as_deref() != Some("/start") {
                continue;
            }

            let chat_id = message.chat.id.to_string();
            tracing::info!(%chat_id, "Telegram /start received, subscribing");
            let loop_token = state.start_push_loop(&chat_id).await;
            let s = state.clone();
            let c = client.clone();
            tokio::spawn(async move { push_loop(s, c, chat_id, loop_token).await });
        }
    }
}

/// Push a fresh OTP to one chat every 60 seconds until cancelled.
///
/// Cancellation comes from successful verification for this chat, a newer
/// `/start` replacing the loop, or process shutdown.
async fn push_loop(
    state: SharedState,
    client: TelegramClient,
    chat_id: String,
    token: CancellationToken,
) {
    loop {
        match services::otp::issue(&state, &chat_id) {
            Ok(code) => {
                if let Err(e) = client
                    .send_message(&chat_id, &format!("🔐 Login code: {code}"))
                    .await
                {
                    tracing::warn!(%chat_id, "Failed to push OTP: {e}");
                }
            }
            Err(e) => tracing::error!(%chat_id, "Failed to issue OTP: {e}"),
        }

        if sleep_or_cancel(&token, Duration::from_secs(PUSH_INTERVAL_SECS)).await {
            tracing::info!(%chat_id, "OTP push loop stopped");
            return;
        }
    }
}
