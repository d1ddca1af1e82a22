//! Error types for recipe-browser

use thiserror::Error;

/// Result type alias for recipe-browser operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in recipe-browser
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from recipe-core
    #[error("{0}")]
    Core(#[from] recipe_core::Error),

    /// Error from recipe-favorites
    #[error("Favorites error: {0}")]
    Favorites(#[from] recipe_favorites::Error),
}
