use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_sessions::{MemoryStore, SessionManagerLayer};

use super::api;
use crate::app::SharedState;

/// Create the axum router with all routes.
pub fn create_router(state: SharedState) -> Router {
    let session_store = MemoryStore::default();
    let session_layer = SessionManagerLayer::new(session_store).with_secure(false);

    Router::new()
        // --- Core ---
        .route("/status", get(status_handler))
        // --- Login ---
        .route("/gmail_otp", post(api::auth::gmail_otp))
        .route("/verify_otp", post(api::auth::verify_otp))
        // --- Dashboard ---
        .route("/", get(api::pages::dashboard))
        // --- Bot actions ---
        .route("/open", post(api::bots::open_bot))
        .route("/toggle/{id}", get(api::bots::toggle_activation))
        .route("/delete/{id}", get(api::bots::delete_activation))
        // --- Analytics ---
        .route("/analytics", get(api::analytics::user_analytics))
        .route("/admin/analytics", get(api::analytics::admin_analytics))
        // --- Admin ---
        .route(
            "/admin",
            get(api::admin::admin_page).post(api::admin::admin_upload),
        )
        .layer(session_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn status_handler() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
