//! Browser configuration.
//!
//! Configuration lives in a TOML file. Every field has a default, so a missing
//! file or a missing key is never an error. Values given on the command line
//! override the file.

use std::path::{Path, PathBuf};
use std::time::Duration;

use recipe_core::Catalog;
use recipe_favorites::{FAVORITES_KEY, FavoritesStore, FileStorage};
use recipe_query::{CategoryFilter, QueryState, SortOrder};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Name used for the config and data directories.
pub const PROJECT_NAME: &str = "recipes";

/// Settings for the recipe browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    /// Catalog file; the builtin catalog is used when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,

    /// Directory holding the favorites store.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorites_dir: Option<PathBuf>,

    /// Key the favorites list is stored under.
    pub storage_key: String,

    /// Search debounce quiet period in milliseconds.
    pub debounce_ms: u64,

    /// Sort order a session starts with.
    pub default_sort: SortOrder,

    /// Category filter a session starts with.
    pub default_filter: CategoryFilter,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            favorites_dir: None,
            storage_key: FAVORITES_KEY.to_string(),
            debounce_ms: 300,
            default_sort: SortOrder::Default,
            default_filter: CategoryFilter::All,
        }
    }
}

impl BrowserConfig {
    /// Standard config file location: `<config dir>/recipes/config.toml`.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(PROJECT_NAME).join("config.toml"))
    }

    /// The explicit path if given, otherwise the standard location.
    ///
    /// The `RECIPES_CONFIG` environment variable arrives here as an explicit
    /// path through the `--config` flag.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        match explicit {
            Some(p) => Some(PathBuf::from(p)),
            None => Self::default_config_path(),
        }
    }

    /// Load configuration.
    ///
    /// An explicitly named file must exist; a missing file at the standard
    /// location yields defaults.
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        let Some(path) = Self::resolve_config_path(explicit) else {
            log::debug!("No config directory on this platform, using defaults");
            return Ok(Self::default());
        };

        if !path.exists() {
            if explicit.is_some() {
                return Err(Error::config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            log::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        Self::from_file(&path)
    }

    /// Read and parse a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        let config = Self::from_toml_str(&content)
            .map_err(|e| Error::config(format!("{}: {e}", path.display())))?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse TOML; absent keys take their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| Error::config(e.to_string()))
    }

    /// Serialize as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Apply command-line overrides.
    pub fn with_overrides(
        mut self,
        catalog_path: Option<PathBuf>,
        favorites_dir: Option<PathBuf>,
    ) -> Self {
        if catalog_path.is_some() {
            self.catalog_path = catalog_path;
        }
        if favorites_dir.is_some() {
            self.favorites_dir = favorites_dir;
        }
        self
    }

    /// Search debounce quiet period.
    pub fn quiet_period(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Query a session starts with.
    pub fn initial_query(&self) -> QueryState {
        QueryState {
            filter: self.default_filter,
            sort: self.default_sort,
            search: String::new(),
        }
    }

    /// Favorites directory: configured, else `<data dir>/recipes`.
    pub fn resolved_favorites_dir(&self) -> Option<PathBuf> {
        self.favorites_dir
            .clone()
            .or_else(|| dirs::data_dir().map(|d| d.join(PROJECT_NAME)))
    }

    /// Load the configured catalog, or the builtin one.
    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.catalog_path {
            Some(path) => Ok(Catalog::load(path)?),
            None => Ok(Catalog::builtin()),
        }
    }

    /// Open the favorites store backed by a file in the favorites directory.
    pub fn open_favorites(&self) -> Result<FavoritesStore<FileStorage>> {
        let dir = self.resolved_favorites_dir().ok_or_else(|| {
            Error::config("Could not determine data directory; pass --favorites-dir")
        })?;
        Ok(FavoritesStore::open(
            FileStorage::new(dir),
            self.storage_key.as_str(),
        ))
    }
}

// ============================================================================
// Tests
// ============================================================================
