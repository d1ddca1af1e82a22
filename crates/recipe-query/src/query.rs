//! Query state types.
//!
//! These types are the session's current selections. Each parses from and
//! displays as its wire name (`"nonveg"`, `"za"`, ...), which is also how the
//! control surfaces and configuration files spell them.

use std::fmt;
use std::str::FromStr;

use recipe_core::{DietType, Error, text};
use serde::{Deserialize, Serialize};

/// Category narrowing applied after the search filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    /// No narrowing.
    #[default]
    All,
    /// Vegetarian recipes only.
    Veg,
    /// Non-vegetarian recipes only.
    NonVeg,
    /// Recipes whose id is in the favorites set.
    Favorites,
}

impl CategoryFilter {
    /// Every filter value, in control-surface order.
    pub const VALUES: [CategoryFilter; 4] = [Self::All, Self::Veg, Self::NonVeg, Self::Favorites];

    /// Wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Veg => "veg",
            Self::NonVeg => "nonveg",
            Self::Favorites => "favorites",
        }
    }

    /// The diet type this filter selects, if it is a diet filter.
    pub fn diet(self) -> Option<DietType> {
        match self {
            Self::Veg => Some(DietType::Veg),
            Self::NonVeg => Some(DietType::NonVeg),
            Self::All | Self::Favorites => None,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::VALUES
            .into_iter()
            .find(|v| v.as_str() == wanted)
            .ok_or_else(|| Error::parse("filter", s))
    }
}

/// Ordering applied to the filtered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortOrder {
    /// Catalog insertion order.
    #[default]
    #[serde(rename = "default")]
    Default,
    /// Title ascending.
    #[serde(rename = "az")]
    AToZ,
    /// Title descending.
    #[serde(rename = "za")]
    ZToA,
}

impl SortOrder {
    /// Every sort value, in control-surface order.
    pub const VALUES: [SortOrder; 3] = [Self::Default, Self::AToZ, Self::ZToA];

    /// Wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::AToZ => "az",
            Self::ZToA => "za",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::VALUES
            .into_iter()
            .find(|v| v.as_str() == wanted)
            .ok_or_else(|| Error::parse("sort order", s))
    }
}

/// The three independent session selections read by the display pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QueryState {
    /// Active category filter.
    #[serde(default)]
    pub filter: CategoryFilter,
    /// Active sort order.
    #[serde(default)]
    pub sort: SortOrder,
    /// Committed search text (as typed; trimmed and folded when matched).
    #[serde(default)]
    pub search: String,
}

impl QueryState {
    /// The search text ready for matching, or `None` when there is nothing to
    /// search for.
    pub fn folded_search(&self) -> Option<String> {
        let trimmed = self.search.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(text::fold(trimmed))
        }
    }

    /// Returns `true` if a non-blank search is active.
    pub fn has_search(&self) -> bool {
        !self.search.trim().is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================
