//! Bot activation actions: open, toggle, delete.
//!
//! Toggle and delete look rows up by primary key only; the row's owner is
//! not checked against the session user.

use axum::Form;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Redirect;
use serde::Deserialize;
use tower_sessions::Session;

use super::err_text;
use crate::app::SharedState;
use crate::auth;

type ActionResult = Result<Redirect, (StatusCode, String)>;

#[derive(Debug, Deserialize)]
pub struct OpenForm {
    pub bot: i64,
}

/// POST /open — record an activation for the session user.
///
/// Purely a record-creation action: no check that the bot exists or that
/// any price is paid.
pub async fn open_bot(
    State(state): State<SharedState>,
    session: Session,
    Form(form): Form<OpenForm>,
) -> ActionResult {
    let user = auth::session_user(&session)
        .await
        .ok_or_else(|| err_text(401, "Login first"))?;

    state
        .db()
        .open_bot(&user, form.bot)
        .map_err(|e| err_text(500, &e.to_string()))?;
    state
        .db()
        .record_user_snapshot(&user)
        .map_err(|e| err_text(500, &e.to_string()))?;
    state
        .db()
        .record_global_snapshot()
        .map_err(|e| err_text(500, &e.to_string()))?;

    Ok(Redirect::to("/"))
}

/// GET /toggle/{id} — flip one activation's active flag.
pub async fn toggle_activation(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> ActionResult {
    let owner = state
        .db()
        .toggle_activation(id)
        .map_err(|e| err_text(500, &e.to_string()))?;
    state
        .db()
        .record_user_snapshot(&owner)
        .map_err(|e| err_text(500, &e.to_string()))?;

    Ok(Redirect::to("/"))
}

/// GET /delete/{id} — remove one activation row. A second delete for the
/// same id finds nothing and still redirects.
pub async fn delete_activation(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> ActionResult {
    let owner = state
        .db()
        .delete_activation(id)
        .map_err(|e| err_text(500, &e.to_string()))?;
    if let Some(owner) = owner {
        state
            .db()
            .record_user_snapshot(&owner)
            .map_err(|e| err_text(500, &e.to_string()))?;
    }

    Ok(Redirect::to("/"))
}
