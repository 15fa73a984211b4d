//! OTP login workflow on top of the database layer.

use market_db::DbError;

use crate::app::SharedState;
use crate::auth;

/// Issue a fresh code for a target contact.
pub fn issue(state: &SharedState, target: &str) -> Result<String, DbError> {
    let code = state.db().issue_otp(target)?;
    tracing::info!(contact = target, "Issued OTP");
    Ok(code)
}

/// Verify a submitted code and, on success, establish the user identity.
///
/// Returns the identity hash to store in the session, or `None` when the
/// code does not match. Creates the user row on first verification and
/// stops any Telegram push loop still issuing codes for the target.
pub async fn verify_and_login(
    state: &SharedState,
    target: &str,
    code: &str,
) -> Result<Option<String>, DbError> {
    if !state.db().verify_otp(target, code)? {
        tracing::debug!(contact = target, "OTP verification failed");
        return Ok(None);
    }

    let username = auth::hash_contact(target);
    state.db().insert_user_if_absent(&username)?;
    state.stop_push_loop(target).await;
    tracing::info!(contact = target, "OTP verified, session established");
    Ok(Some(username))
}
