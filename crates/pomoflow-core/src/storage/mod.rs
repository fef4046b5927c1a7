//! Persistence adapter.
//!
//! The combined snapshot round-trips through an opaque key-value blob under
//! a single fixed key. The dispatch core hands every accepted snapshot to
//! the adapter; write failures are logged by the core and never surfaced
//! to the reaction chain.

mod sqlite;

pub use sqlite::SqliteStateStore;

use std::path::PathBuf;

use crate::error::StorageError;
use crate::state::AppState;

/// Durable storage for the combined snapshot.
pub trait StateStore {
    /// The previously serialized snapshot, or `None` on first launch.
    ///
    /// # Errors
    /// Returns an error if the backing store cannot be read at all.
    fn load(&self) -> Result<Option<AppState>, StorageError>;

    /// # Errors
    /// Returns an error if the snapshot cannot be written.
    fn save(&self, state: &AppState) -> Result<(), StorageError>;
}

/// Returns `~/.config/pomoflow[-dev]/` based on POMOFLOW_ENV.
///
/// Set POMOFLOW_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("POMOFLOW_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("pomoflow-dev")
    } else {
        base_dir.join("pomoflow")
    };

    std::fs::create_dir_all(&dir).map_err(|e| StorageError::DataDir(e.to_string()))?;
    Ok(dir)
}
