//! Session identity helpers.
//!
//! A logged-in session carries only the SHA-256 hex hash of the raw
//! contact string (email address or Telegram chat id). The hash is the
//! user's opaque identity everywhere: session, users table, activations.

use sha2::{Digest, Sha256};
use tower_sessions::Session;

use crate::config::AppConfig;

/// Session key holding the identity hash.
pub const SESSION_USER_KEY: &str = "user";

/// One-way hash of a raw contact string.
pub fn hash_contact(contact: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(contact.as_bytes());
    hex::encode(hasher.finalize())
}

/// The session's identity hash, if logged in.
pub async fn session_user(session: &Session) -> Option<String> {
    session.get::<String>(SESSION_USER_KEY).await.ok().flatten()
}

/// Whether the session belongs to the configured administrator.
pub async fn is_admin(session: &Session, config: &AppConfig) -> bool {
    if config.admin_contact.is_empty() {
        return false;
    }
    match session_user(session).await {
        Some(user) => user == hash_contact(&config.admin_contact),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_sha256_hex() {
        // echo -n "a@b.com" | sha256sum
        assert_eq!(
            hash_contact("a@b.com"),
            "fb98d44ad7501a959f3f4f4a3f004fe2d9e581ea6207e218c4b02c08a4d75adf"
        );
    }

    #[test]
    fn hash_is_stable_and_distinct() {
        assert_eq!(hash_contact("123456"), hash_contact("123456"));
        assert_ne!(hash_contact("123456"), hash_contact("123457"));
        assert_eq!(hash_contact("x").len(), 64);
    }
}
