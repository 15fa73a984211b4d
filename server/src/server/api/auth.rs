//! OTP login endpoints.

use axum::Form;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use tower_sessions::Session;

use super::err_text;
use crate::app::SharedState;
use crate::auth;
use crate::services::{mailer, otp};

type LoginResult = Result<&'static str, (StatusCode, String)>;

#[derive(Debug, Deserialize)]
pub struct GmailOtpForm {
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct VerifyOtpForm {
    pub target: String,
    pub code: String,
}

/// POST /gmail_otp — issue a code and mail it to the given address.
pub async fn gmail_otp(
    State(state): State<SharedState>,
    Form(form): Form<GmailOtpForm>,
) -> LoginResult {
    let code = otp::issue(&state, &form.email).map_err(|e| err_text(500, &e.to_string()))?;

    let config = state.config().await.clone();
    mailer::send_otp_email(&config, &form.email, &code)
        .await
        .map_err(|e| err_text(500, &e.to_string()))?;

    Ok("OK")
}

/// POST /verify_otp — check a submitted code and establish the session.
///
/// Returns the literal `OK`/`ERROR` body; no failure classification.
pub async fn verify_otp(
    State(state): State<SharedState>,
    session: Session,
    Form(form): Form<VerifyOtpForm>,
) -> LoginResult {
    let username = otp::verify_and_login(&state, &form.target, &form.code)
        .await
        .map_err(|e| err_text(500, &e.to_string()))?;

    match username {
        Some(username) => {
            session
                .insert(auth::SESSION_USER_KEY, username)
                .await
                .map_err(|e| err_text(500, &e.to_string()))?;
            Ok("OK")
        }
        None => Ok("ERROR"),
    }
}

#[cfg(test)]
mod tests {
    use axum::extract::State;

    use super::super::testing::{test_session, test_state};
    use super::*;

    #[tokio::test]
    async fn verify_otp_rejects_wrong_code_with_error_body() {
        let state = test_state();
        let issued = state.db().issue_otp("a@b.com").unwrap();
        let wrong = if issued == "000000" { "000001" } else { "000000" };

        let session = test_session();
        let result = verify_otp(
            State(state),
            session.clone(),
            Form(VerifyOtpForm {
                target: "a@b.com".into(),
                code: wrong.into(),
            }),
        )
        .await;

        assert_eq!(result.unwrap(), "ERROR");
        assert_eq!(auth::session_user(&session).await, None);
    }

    #[tokio::test]
    async fn verify_otp_accepts_issued_code_and_sets_session() {
        let state = test_state();
        let code = state.db().issue_otp("a@b.com").unwrap();

        let session = test_session();
        let result = verify_otp(
            State(state.clone()),
            session.clone(),
            Form(VerifyOtpForm {
                target: "a@b.com".into(),
                code: code.clone(),
            }),
        )
        .await;

        assert_eq!(result.unwrap(), "OK");
        assert_eq!(
            auth::session_user(&session).await,
            Some(auth::hash_contact("a@b.com"))
        );
        assert_eq!(state.db().count_users().unwrap(), 1);

        // The same code cannot establish a second session.
        let second = verify_otp(
            State(state),
            test_session(),
            Form(VerifyOtpForm {
                target: "a@b.com".into(),
                code,
            }),
        )
        .await;
        assert_eq!(second.unwrap(), "ERROR");
    }
}
