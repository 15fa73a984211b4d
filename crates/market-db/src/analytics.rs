//! Append-only analytics snapshots.
//!
//! Counts are recomputed with full-table aggregates at each triggering
//! action rather than kept incrementally. Snapshot rows are pure history
//! and are never mutated.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{Database, DbError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSnapshot {
    pub date: String,
    pub bot_count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalSnapshot {
    pub date: String,
    pub users: i64,
    pub bots: i64,
    pub active_bots: i64,
}

fn today() -> String {
    Utc::now().date_naive().to_string()
}

impl Database {
    /// Append a per-user snapshot of the user's current activation count.
    pub fn record_user_snapshot(&self, username: &str) -> Result<(), DbError> {
        let count = self.count_user_activations(username)?;
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO analytics (username, date, bot_count) VALUES (?1, ?2, ?3)",
                rusqlite::params![username, today(), count],
            )?;
            Ok(())
        })
    }

    /// Append a global snapshot of user, activation, and active counts.
    pub fn record_global_snapshot(&self) -> Result<(), DbError> {
        let users = self.count_users()?;
        let bots = self.count_activations()?;
        let active = self.count_active_activations()?;
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO global_analytics (date, users, bots, active_bots)
                 VALUES (?1, ?2, ?3, ?4)",
                rusqlite::params![today(), users, bots, active],
            )?;
            Ok(())
        })
    }

    pub fn get_user_snapshots(&self, username: &str) -> Result<Vec<UserSnapshot>, DbError> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT date, bot_count FROM analytics WHERE username = ?1 ORDER BY id ASC",
            )?;
            let rows = stmt.query_map([username], |row| {
                Ok(UserSnapshot {
                    date: row.get(0)?,
                    bot_count: row.get(1)?,
                })
            })?;
            rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
        })
    }

    pub fn get_global_snapshots(&self) -> Result<Vec<GlobalSnapshot>, DbError> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT date, users, bots, active_bots FROM global_analytics ORDER BY rowid ASC",
            )?;
            let rows = stmt.query_map([], |row| {
                Ok(GlobalSnapshot {
                    date: row.get(0)?,
                    users: row.get(1)?,
                    bots: row.get(2)?,
                    active_bots: row.get(3)?,
                })
            })?;
            rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
        })
    }
}
