//! Core error types for pomoflow-core.
//!
//! Dispatch failures leave state untouched and are surfaced to the caller.
//! External collaborator failures (persistence writes, the notification
//! sink) are logged and swallowed by the dispatch core instead of being
//! raised through this hierarchy.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for pomoflow-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Rejected operation payload
    #[error("Dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Why a dispatched operation was rejected.
///
/// A rejected dispatch never mutates the combined state.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// The operation payload fails validation
    #[error("Invalid payload for '{field}': {message}")]
    InvalidPayload { field: &'static str, message: String },
}

/// Storage-specific errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to open the snapshot database
    #[error("Failed to open state store at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Snapshot could not be encoded for storage
    #[error("Failed to encode snapshot: {0}")]
    Encode(#[from] serde_json::Error),

    /// Data directory could not be resolved or created
    #[error("Data directory unavailable: {0}")]
    DataDir(String),
}

impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        StorageError::QueryFailed(err.to_string())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
