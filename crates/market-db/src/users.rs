//! User identity storage.
//!
//! Usernames are one-way hashes of the raw contact string; the raw contact
//! is never persisted.

use chrono::Utc;

use crate::otp::timestamp;
use crate::{Database, DbError};

impl Database {
    /// Create the user row if absent. First verification wins; later calls
    /// for the same hash are no-ops.
    pub fn insert_user_if_absent(&self, username: &str) -> Result<(), DbError> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT OR IGNORE INTO users (username, created_at) VALUES (?1, ?2)",
                rusqlite::params![username, timestamp(Utc::now())],
            )?;
            Ok(())
        })
    }

    pub fn count_users(&self) -> Result<i64, DbError> {
        self.with_conn(|conn| {
            let count = conn.query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))?;
            Ok(count)
        })
    }
}
