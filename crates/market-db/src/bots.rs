//! Bot template catalog storage.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::otp::timestamp;
use crate::{Database, DbError};

/// An admin-uploaded bot package. Immutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotTemplate {
    pub id: i64,
    pub name: String,
    pub price: i64,
    pub zip_path: String,
    pub created_at: String,
}

impl Database {
    /// Insert a catalog entry and return its id.
    pub fn add_bot(&self, name: &str, price: i64, zip_path: &str) -> Result<i64, DbError> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO bots (name, price, zip_path, created_at) VALUES (?1, ?2, ?3, ?4)",
                rusqlite::params![name, price, zip_path, timestamp(Utc::now())],
            )?;
            Ok(conn.last_insert_rowid())
        })
    }

    pub fn get_all_bots(&self) -> Result<Vec<BotTemplate>, DbError> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, name, price, zip_path, created_at FROM bots ORDER BY id ASC",
            )?;
            let rows = stmt.query_map([], |row| {
                Ok(BotTemplate {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    price: row.get(2)?,
                    zip_path: row.get(3)?,
                    created_at: row.get(4)?,
                })
            })?;
            rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
        })
    }

    pub fn count_bots(&self) -> Result<i64, DbError> {
        self.with_conn(|conn| {
            let count = conn.query_row("SELECT COUNT(*) FROM bots", [], |row| row.get(0))?;
            Ok(count)
        })
    }
}
