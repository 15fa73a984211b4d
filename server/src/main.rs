//! BotMarket server binary.
//!
//! Starts the axum web server, the Telegram long-poll listener, and
//! signal handling.

use tracing_subscriber::EnvFilter;

use botmarket::app::SharedState;
use botmarket::{background, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting BotMarket");

    let (db, config, dir) = botmarket::init_foundation()?;
    let state = SharedState::new(db, config, dir);

    let server_state = state.clone();
    let server_handle = tokio::spawn(async move {
        if let Err(e) = server::start_server(server_state).await {
            tracing::error!("Server failed: {e}");
        }
    });

    let s = state.clone();
    tokio::spawn(async move { background::telegram_poll_loop(s).await });

    tracing::info!(
        port = state.server_port(),
        "Server running. Press Ctrl+C to stop."
    );

    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutting down...");
    state.shutdown_token().cancel();
    let _ = server_handle.await;
    Ok(())
}
