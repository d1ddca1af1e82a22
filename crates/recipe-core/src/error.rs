//! Error types for recipe-core

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::recipe::RecipeId;

/// Result type alias for recipe-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in recipe-core
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The catalog violates an invariant (duplicate ids, empty titles).
    #[error("Invalid catalog: {message}")]
    InvalidCatalog {
        /// What is wrong with the catalog
        message: String,
    },

    /// No recipe with the given id exists in the catalog.
    #[error("Recipe not found: {id}")]
    RecipeNotFound {
        /// The id that was looked up
        id: RecipeId,
    },

    /// A value could not be parsed from its textual form.
    #[error("Invalid {what}: '{value}'")]
    Parse {
        /// The kind of value being parsed (e.g. "sort order")
        what: &'static str,
        /// The offending input
        value: String,
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

    /// TOML deserialization error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Creates an invalid-catalog error.
    pub fn invalid_catalog<S: Into<String>>(message: S) -> Self {
        Error::InvalidCatalog {
            message: message.into(),
        }
    }

    /// Creates a parse error for the given kind of value.
    pub fn parse<S: Into<String>>(what: &'static str, value: S) -> Self {
        Error::Parse {
            what,
            value: value.into(),
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

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_catalog_display() {
        let err = Error::invalid_catalog("duplicate recipe id 3");
        assert_eq!(err.to_string(), "Invalid catalog: duplicate recipe id 3");
    }

    #[test]
    fn test_parse_display() {
        let err = Error::parse("sort order", "random");
        assert_eq!(err.to_string(), "Invalid sort order: 'random'");
    }

    #[test]
    fn test_not_found_display() {
        let err = Error::RecipeNotFound {
            id: RecipeId::new(42).unwrap(),
        };
        assert_eq!(err.to_string(), "Recipe not found: 42");
    }

    #[test]
    fn test_io_with_path_display() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = Error::io_with_path(io, "/tmp/recipes.toml");
        let msg = err.to_string();
        assert!(msg.contains("/tmp/recipes.toml"));
        assert!(msg.contains("gone"));
    }
}
