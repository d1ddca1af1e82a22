//! Error types for recipe-favorites

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for recipe-favorites operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in recipe-favorites
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from recipe-core
    #[error("Core error: {0}")]
    Core(#[from] recipe_core::Error),

    /// The storage backend refused or failed an operation.
    #[error("Storage error: {message}")]
    Storage {
        /// What went wrong
        message: String,
    },

    /// I/O error with the path that caused it.
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        /// Path being read or written
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Creates a storage error.
    pub fn storage<S: Into<String>>(message: S) -> Self {
        Error::Storage {
            message: message.into(),
        }
    }

    /// Wraps an I/O error together with the path it happened on.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
