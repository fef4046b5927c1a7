//! SQLite-backed snapshot store.
//!
//! One `kv` table, one row: the whole combined state as a JSON blob under
//! [`STORE_KEY`]. An unreadable blob is treated as "no prior state" so a
//! corrupt file never wedges startup.

use std::path::{Path, PathBuf};

use rusqlite::{params, Connection};

use super::{data_dir, StateStore};
use crate::error::StorageError;
use crate::state::AppState;

/// Fixed namespace key for the snapshot blob.
const STORE_KEY: &str = "pomoflow-store";

pub struct SqliteStateStore {
    conn: Connection,
}

impl SqliteStateStore {
    /// Open the store at `~/.config/pomoflow/pomoflow.db`.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self, StorageError> {
        let path = data_dir()?.join("pomoflow.db");
        Self::with_path(&path)
    }

    /// Open the store at an explicit path.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn with_path(path: &Path) -> Result<Self, StorageError> {
        let conn = Connection::open(path).map_err(|source| StorageError::OpenFailed {
            path: PathBuf::from(path),
            source,
        })?;
        Self::from_conn(conn)
    }

    /// In-memory store for tests.
    ///
    /// # Errors
    /// Returns an error if the schema cannot be created.
    pub fn open_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory().map_err(|source| StorageError::OpenFailed {
            path: PathBuf::from(":memory:"),
            source,
        })?;
        Self::from_conn(conn)
    }

    fn from_conn(conn: Connection) -> Result<Self, StorageError> {
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );",
        )?;
        Ok(Self { conn })
    }

    fn kv_get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let mut stmt = self.conn.prepare("SELECT value FROM kv WHERE key = ?1")?;
        let result = stmt.query_row(params![key], |row| row.get::<_, String>(0));
        match result {
            Ok(v) => Ok(Some(v)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn kv_set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }
}

impl StateStore for SqliteStateStore {
    fn load(&self) -> Result<Option<AppState>, StorageError> {
        let Some(json) = self.kv_get(STORE_KEY)? else {
            return Ok(None);
        };
        match serde_json::from_str(&json) {
            Ok(state) => Ok(Some(state)),
            Err(e) => {
                log::warn!("stored snapshot unreadable, starting fresh: {e}");
                Ok(None)
            }
        }
    }

    fn save(&self, state: &AppState) -> Result<(), StorageError> {
        let json = serde_json::to_string(state)?;
        self.kv_set(STORE_KEY, &json)
    }
}
