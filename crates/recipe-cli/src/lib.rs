//! # recipe-cli
//!
//! Command-line front end for the recipe browser.
//!
//! This crate provides:
//! - One-shot commands: list, show, favorite, favorites
//! - An interactive `browse` session with debounced search
//! - Configuration file management (`config path|show|init`)
//! - A text presenter that draws recipe cards

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod browse;
pub mod cli;
pub mod commands;
pub mod config;
pub mod config_handlers;
pub mod error;
pub mod render;

pub use error::{Error, Result};
