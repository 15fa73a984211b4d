//! HTTP handlers grouped by domain.

pub mod admin;
pub mod analytics;
pub mod auth;
pub mod bots;
pub mod pages;

use axum::Json;
use axum::http::StatusCode;
use serde_json::{Value, json};

/// Standard error response for JSON endpoints.
pub fn err_json(status: u16, message: &str) -> (StatusCode, Json<Value>) {
    (
        StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        Json(json!({ "status": "error", "error": message })),
    )
}

/// Plain-text error response for the HTML/redirect endpoints.
pub fn err_text(status: u16, message: &str) -> (StatusCode, String) {
    (
        StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        message.to_string(),
    )
}

#[cfg(test)]
pub(crate) mod testing {
    use std::path::PathBuf;
    use std::sync::Arc;

    use market_db::Database;
    use tower_sessions::{MemoryStore, Session};

    use crate::app::SharedState;
    use crate::config::AppConfig;

    pub const ADMIN_CONTACT: &str = "admin@b.com";

    /// Shared state over an in-memory database with a configured admin.
    pub fn test_state() -> SharedState {
        let db = Database::open_in_memory().expect("Failed to create test DB");
        let config = AppConfig {
            admin_contact: ADMIN_CONTACT.into(),
            ..AppConfig::default()
        };
        SharedState::new(db, config, PathBuf::from("."))
    }

    /// Fresh session backed by an in-memory store, no layer required.
    pub fn test_session() -> Session {
        Session::new(None, Arc::new(MemoryStore::default()), None)
    }
}
