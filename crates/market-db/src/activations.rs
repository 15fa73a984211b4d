//! Per-user bot activation storage.

use chrono::Utc;
use rusqlite::OptionalExtension;
use serde::{Deserialize, Serialize};

use crate::otp::timestamp;
use crate::{Database, DbError};

/// A user's activation joined with its catalog entry, for the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivationView {
    pub id: i64,
    pub bot_name: String,
    pub price: i64,
    pub active: bool,
}

impl Database {
    /// Record an activation for `username`. No uniqueness constraint: opening
    /// the same template twice creates two rows. Returns the row id.
    pub fn open_bot(&self, username: &str, bot_id: i64) -> Result<i64, DbError> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO user_bots (username, bot_id, active, created_at)
                 VALUES (?1, ?2, 1, ?3)",
                rusqlite::params![username, bot_id, timestamp(Utc::now())],
            )?;
            Ok(conn.last_insert_rowid())
        })
    }

    pub fn get_user_activations(&self, username: &str) -> Result<Vec<ActivationView>, DbError> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT user_bots.id, bots.name, bots.price, user_bots.active
                 FROM user_bots JOIN bots ON bots.id = user_bots.bot_id
                 WHERE user_bots.username = ?1
                 ORDER BY user_bots.id ASC",
            )?;
            let rows = stmt.query_map([username], |row| {
                Ok(ActivationView {
                    id: row.get(0)?,
                    bot_name: row.get(1)?,
                    price: row.get(2)?,
                    active: row.get::<_, i64>(3)? != 0,
                })
            })?;
            rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
        })
    }

    pub fn count_user_activations(&self, username: &str) -> Result<i64, DbError> {
        self.with_conn(|conn| {
            let count = conn.query_row(
                "SELECT COUNT(*) FROM user_bots WHERE username = ?1",
                [username],
                |row| row.get(0),
            )?;
            Ok(count)
        })
    }

    /// Flip the active flag of a single activation row by primary key.
    ///
    /// Lookup is by id only; the caller's identity is not checked. Returns
    /// the owning username for analytics recording.
    pub fn toggle_activation(&self, id: i64) -> Result<String, DbError> {
        self.with_conn(|conn| {
            let row: Option<(i64, String)> = conn
                .query_row(
                    "SELECT active, username FROM user_bots WHERE id = ?1",
                    [id],
                    |row| Ok((row.get(0)?, row.get(1)?)),
                )
                .optional()?;
            let (active, username) =
                row.ok_or_else(|| DbError::NotFound(format!("activation {id}")))?;
            conn.execute(
                "UPDATE user_bots SET active = ?1 WHERE id = ?2",
                rusqlite::params![if active != 0 { 0 } else { 1 }, id],
            )?;
            Ok(username)
        })
    }

    /// Delete an activation row by primary key.
    ///
    /// Returns the owning username when a row existed; `None` when the id
    /// was already gone, so a second delete is a no-op for the caller.
    pub fn delete_activation(&self, id: i64) -> Result<Option<String>, DbError> {
        self.with_conn(|conn| {
            let username: Option<String> = conn
                .query_row(
                    "SELECT username FROM user_bots WHERE id = ?1",
                    [id],
                    |row| row.get(0),
                )
                .optional()?;
            if username.is_some() {
                conn.execute("DELETE FROM user_bots WHERE id = ?1", [id])?;
            }
            Ok(username)
        })
    }

    pub fn count_activations(&self) -> Result<i64, DbError> {
        self.with_conn(|conn| {
            let count = conn.query_row("SELECT COUNT(*) FROM user_bots", [], |row| row.get(0))?;
            Ok(count)
        })
    }

    pub fn count_active_activations(&self) -> Result<i64, DbError> {
        self.with_conn(|conn| {
            let count = conn.query_row(
                "SELECT COUNT(*) FROM user_bots WHERE active = 1",
                [],
                |row| row.get(0),
            )?;
            Ok(count)
        })
    }
}
