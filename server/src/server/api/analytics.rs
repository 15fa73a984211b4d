//! Analytics JSON endpoints.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tower_sessions::Session;

use super::err_json;
use crate::app::SharedState;
use crate::auth;

/// GET /analytics — the session user's snapshot history as parallel
/// label/value arrays for the dashboard chart.
pub async fn user_analytics(State(state): State<SharedState>, session: Session) -> Response {
    let Some(user) = auth::session_user(&session).await else {
        return err_json(401, "Login first").into_response();
    };

    match state.db().get_user_snapshots(&user) {
        Ok(snaps) => {
            let labels: Vec<&str> = snaps.iter().map(|s| s.date.as_str()).collect();
            let values: Vec<i64> = snaps.iter().map(|s| s.bot_count).collect();
            Json(json!({ "l": labels, "v": values })).into_response()
        }
        Err(e) => err_json(500, &e.to_string()).into_response(),
    }
}

/// GET /admin/analytics — full global snapshot history; admin only.
pub async fn admin_analytics(State(state): State<SharedState>, session: Session) -> Response {
    let config = state.config().await.clone();
    if !auth::is_admin(&session, &config).await {
        return "DENIED".into_response();
    }

    match state.db().get_global_snapshots() {
        Ok(rows) => Json(rows).into_response(),
        Err(e) => err_json(500, &e.to_string()).into_response(),
    }
}
