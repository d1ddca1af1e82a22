//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use recipe_core::RecipeId;
use recipe_query::{CategoryFilter, SortOrder};

/// Browse, search and favorite recipes.
#[derive(Parser, Debug)]
#[command(name = "recipes")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, env = "RECIPES_CONFIG")]
    pub config: Option<String>,

    /// Catalog file to load instead of the builtin recipes (.json or .toml)
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Directory holding the favorites store
    #[arg(long, global = true)]
    pub favorites_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Command to run (defaults to `list`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List recipes matching a filter, sort order and search
    List(ListArgs),

    /// Show one recipe with its ingredients and steps expanded
    Show {
        /// Recipe id
        id: RecipeId,
    },

    /// Toggle a recipe's favorite status
    Favorite {
        /// Recipe id
        id: RecipeId,
    },

    /// List favorite recipes in the order they were added
    Favorites,

    /// Interactive browsing session
    Browse,

    /// Configuration management
    Config {
        /// Config subcommand
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Arguments for `list`.
#[derive(Args, Debug, Default, Clone)]
pub struct ListArgs {
    /// Category: all, veg, nonveg, favorites
    #[arg(short, long)]
    pub filter: Option<CategoryFilter>,

    /// Sort order: default, az, za
    #[arg(short, long)]
    pub sort: Option<SortOrder>,

    /// Case-insensitive text search over titles, descriptions and ingredients
    #[arg(short = 'q', long)]
    pub search: Option<String>,

    /// Print the view as JSON
    #[arg(long)]
    pub json: bool,
}

/// Configuration subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the config file path
    Path,

    /// Show the effective configuration as TOML
    Show,

    /// Write a default configuration file
    Init {
        /// Output file path (defaults to the standard config location)
        #[arg(long)]
        file: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

// ============================================================================
// Tests
// ============================================================================
