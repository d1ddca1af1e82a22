//! Error types for recipe-cli

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for recipe-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in recipe-cli
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from recipe-core
    #[error("{0}")]
    Core(#[from] recipe_core::Error),

    /// Error from recipe-favorites
    #[error("Favorites error: {0}")]
    Favorites(#[from] recipe_favorites::Error),

    /// Error from recipe-browser
    #[error("{0}")]
    Browser(#[from] recipe_browser::Error),

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
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

    /// Writing command output failed.
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),

    /// JSON output error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Creates a configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
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
