use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use market_db::Database;
use tokio::sync::{Mutex, RwLock};
use tokio_util::sync::CancellationToken;

use crate::config::AppConfig;

/// Application shared state accessible from axum handlers and background loops.
#[derive(Clone)]
pub struct SharedState {
    inner: Arc<SharedStateInner>,
}

struct SharedStateInner {
    /// Application configuration (reloadable)
    config: RwLock<AppConfig>,
    /// Database handle
    db: Database,
    /// Data directory path
    data_dir: PathBuf,
    /// Cancelled once on process shutdown; all loop tokens derive from it.
    shutdown: CancellationToken,
    /// Active Telegram push loops keyed by chat id. In-memory only;
    /// lost on restart.
    push_loops: Mutex<HashMap<String, CancellationToken>>,
}

impl SharedState {
    /// Create shared state from an already-opened database and loaded config.
    pub fn new(db: Database, config: AppConfig, data_dir: PathBuf) -> Self {
        Self {
            inner: Arc::new(SharedStateInner {
                config: RwLock::new(config),
                db,
                data_dir,
                shutdown: CancellationToken::new(),
                push_loops: Mutex::new(HashMap::new()),
            }),
        }
    }

    pub fn server_port(&self) -> u16 {
        self.inner
            .config
            .try_read()
            .map(|c| c.server_port)
            .unwrap_or(8080)
    }

    pub fn db(&self) -> &Database {
        &self.inner.db
    }

    pub fn data_dir(&self) -> &PathBuf {
        &self.inner.data_dir
    }

    /// Directory where uploaded bot archives are stored.
    pub fn templates_dir(&self) -> PathBuf {
        self.inner.data_dir.join("bot_templates")
    }

    /// Get a read lock on the current config.
    pub async fn config(&self) -> tokio::sync::RwLockReadGuard<'_, AppConfig> {
        self.inner.config.read().await
    }

    pub fn shutdown_token(&self) -> &CancellationToken {
        &self.inner.shutdown
    }

    /// Register a push loop for a chat, replacing (and cancelling) any
    /// existing loop for the same chat. Returns the loop's token.
    pub async fn start_push_loop(&self, chat_id: &str) -> CancellationToken {
        let mut loops = self.inner.push_loops.lock().await;
        if let Some(old) = loops.remove(chat_id) {
            old.cancel();
        }
        let token = self.inner.shutdown.child_token();
        loops.insert(chat_id.to_string(), token.clone());
        token
    }

    /// Stop the push loop for a target, if one is running. Called on
    /// successful OTP verification; a no-op for email targets.
    pub async fn stop_push_loop(&self, target: &str) {
        if let Some(token) = self.inner.push_loops.lock().await.remove(target) {
            token.cancel();
            tracing::info!(contact = target, "Stopped OTP push loop");
        }
    }
}
