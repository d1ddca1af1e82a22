//! Recipe Core: shared types, catalog, text helpers and errors.
//!
//! This crate provides the foundational types used across all recipe browser
//! crates. It has no internal dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`recipe`]: The [`Recipe`] record and its identifier and diet types
//! - [`catalog`]: The immutable, ordered [`Catalog`] of recipes
//! - [`favorite`]: The [`FavoriteSet`] membership trait
//! - [`text`]: Case folding and locale-aware title collation

#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod favorite;
pub mod recipe;
pub mod text;

// Re-export key types at crate root for convenience
pub use catalog::Catalog;
pub use error::{Error, Result};
pub use favorite::FavoriteSet;
pub use recipe::{DietType, Recipe, RecipeId};
