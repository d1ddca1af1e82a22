//! # recipe-favorites
//!
//! Persisted favorites for the recipe browser.
//!
//! This crate provides:
//! - The [`Storage`] trait: a durable key-value slot store
//! - [`MemoryStorage`] (for testing) and [`FileStorage`] backends
//! - [`FavoritesStore`]: a write-through set of favorite recipe ids

#![forbid(unsafe_code)]

pub mod error;
pub mod storage;
pub mod store;

pub use error::{Error, Result};
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use store::{FAVORITES_KEY, FavoritesStore, parse_favorites};
