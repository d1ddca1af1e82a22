//! Inbound UI events.

use std::fmt;
use std::str::FromStr;

use recipe_core::{Error, RecipeId};
use recipe_query::{CategoryFilter, SortOrder};

/// One of the two collapsible panels on a recipe card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    /// The ingredients list.
    Ingredients,
    /// The numbered steps list.
    Steps,
}

impl Panel {
    /// Panel heading text.
    pub fn label(self) -> &'static str {
        match self {
            Self::Ingredients => "Ingredients",
            Self::Steps => "Steps",
        }
    }
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ingredients => f.write_str("ingredients"),
            Self::Steps => f.write_str("steps"),
        }
    }
}

impl FromStr for Panel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ingredients" | "i" => Ok(Self::Ingredients),
            "steps" | "s" => Ok(Self::Steps),
            _ => Err(Error::parse("panel", s)),
        }
    }
}

/// Events emitted by the control surfaces and the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// A filter button was selected.
    FilterSelected(CategoryFilter),
    /// A sort option was selected.
    SortSelected(SortOrder),
    /// The search field changed; carries the full raw field value.
    TextChanged(String),
    /// The clear-search affordance was used.
    ClearRequested,
    /// A card's favorite marker was clicked.
    FavoriteToggled(RecipeId),
    /// A card's panel heading was clicked.
    PanelToggled(RecipeId, Panel),
}
