//! OTP code issuance and verification.

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use rand::Rng;
use rusqlite::OptionalExtension;

use crate::{Database, DbError};

/// Lifetime of an issued code in seconds.
pub const OTP_TTL_SECS: i64 = 60;

/// Fixed-width timestamp format so expiry can be compared lexically in SQL.
pub(crate) fn timestamp(t: DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn generate_code() -> String {
    format!("{:06}", rand::thread_rng().gen_range(0..1_000_000))
}

impl Database {
    /// Issue a fresh 6-digit code for `target`, valid for [`OTP_TTL_SECS`].
    ///
    /// Returns the code for out-of-band delivery. Codes are never deleted,
    /// only flagged verified, so multiple outstanding codes per target are
    /// allowed.
    pub fn issue_otp(&self, target: &str) -> Result<String, DbError> {
        let code = generate_code();
        let expires_at = timestamp(Utc::now() + Duration::seconds(OTP_TTL_SECS));
        self.insert_otp(target, &code, &expires_at)?;
        Ok(code)
    }

    /// Insert a code row with an explicit expiry.
    pub fn insert_otp(&self, target: &str, code: &str, expires_at: &str) -> Result<(), DbError> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO otp_codes (target, code, expires_at, verified)
                 VALUES (?1, ?2, ?3, 0)",
                rusqlite::params![target, code, expires_at],
            )?;
            Ok(())
        })
    }

    /// Consume a matching code.
    ///
    /// Succeeds iff an unverified, unexpired row matches `target` and `code`;
    /// among matches the most recently inserted row wins and is flagged
    /// verified. Older duplicate codes for the same target stay valid until
    /// they individually expire. Returns plain false on any mismatch — no
    /// distinction between wrong, expired, and already used.
    pub fn verify_otp(&self, target: &str, code: &str) -> Result<bool, DbError> {
        let now = timestamp(Utc::now());
        self.with_conn(|conn| {
            let matched: Option<i64> = conn
                .query_row(
                    "SELECT id FROM otp_codes
                     WHERE target = ?1 AND code = ?2 AND verified = 0 AND expires_at > ?3
                     ORDER BY id DESC LIMIT 1",
                    rusqlite::params![target, code, now],
                    |row| row.get(0),
                )
                .optional()?;
            match matched {
                Some(id) => {
                    conn.execute("UPDATE otp_codes SET verified = 1 WHERE id = ?1", [id])?;
                    Ok(true)
                }
                None => Ok(false),
            }
        })
    }
}
