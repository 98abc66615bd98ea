//! Error types for the rename-template engine.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from the pure configuration mutators.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// The requested move or toggle is not allowed on this configuration.
    #[error("invalid operation: {0}")]
    InvalidOperation(String),
}

/// Underlying settings-store failure.
#[derive(Debug, Error)]
pub enum PersistError {
    /// Failed to create the directory holding the settings store.
    #[error("failed to create settings directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the settings store to disk.
    #[error("failed to write settings store {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to encode a value for storage.
    #[error("failed to encode settings data: {source}")]
    Encode {
        #[source]
        source: serde_json::Error,
    },
}

/// Errors from the preset store.
#[derive(Debug, Error)]
pub enum PresetError {
    /// No preset stored under the given name.
    #[error("preset not found: {name}")]
    NotFound { name: String },

    /// The stored blob exists but does not deserialize.
    #[error("preset data for '{name}' is corrupt: {message}")]
    Corrupt { name: String, message: String },

    /// Built-in presets cannot be removed.
    #[error("built-in preset '{name}' cannot be deleted")]
    CannotDeleteBuiltin { name: String },

    /// The underlying store failed to persist the change.
    #[error(transparent)]
    Persist(#[from] PersistError),
}
