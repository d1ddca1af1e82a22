//! The recipe catalog.
//!
//! A [`Catalog`] is an ordered, immutable list of recipes. Catalog order is
//! the "default" sort order, so it is preserved exactly as loaded.
//!
//! # Sources
//!
//! - [`Catalog::builtin`]: the recipes shipped with the browser
//! - [`Catalog::load`]: a TOML (`[[recipes]]`) or JSON file
//!
//! ```rust
//! use recipe_core::Catalog;
//!
//! let catalog = Catalog::builtin();
//! assert_eq!(catalog.len(), 3);
//! assert_eq!(catalog.recipes()[0].title, "Veg Pasta");
//! ```

use std::collections::HashSet;
use std::num::NonZeroU32;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::recipe::{DietType, Recipe, RecipeId};

/// Ordered, read-only list of recipes with unique ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    recipes: Vec<Recipe>,
}

#[derive(Deserialize)]
struct CatalogDocument {
    recipes: Vec<Recipe>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonCatalog {
    List(Vec<Recipe>),
    Document(CatalogDocument),
}

impl Catalog {
    /// Create a catalog, validating id uniqueness and non-empty titles.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCatalog`] if two recipes share an id or a
    /// title is blank.
    pub fn new(recipes: Vec<Recipe>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(recipes.len());
        for recipe in &recipes {
            if !seen.insert(recipe.id) {
                return Err(Error::invalid_catalog(format!(
                    "duplicate recipe id {}",
                    recipe.id
                )));
            }
            if recipe.title.trim().is_empty() {
                return Err(Error::invalid_catalog(format!(
                    "recipe {} has an empty title",
                    recipe.id
                )));
            }
        }
        Ok(Self { recipes })
    }

    /// The recipes shipped with the browser.
    pub fn builtin() -> Self {
        let recipes = vec![
            Recipe::builder(VEG_PASTA, "Veg Pasta", DietType::Veg)
                .description("Creamy delicious pasta")
                .ingredients(["pasta", "cream", "tomato", "cheese"])
                .steps(["Boil pasta", "Prepare sauce", "Mix together"])
                .build(),
            Recipe::builder(CHICKEN_CURRY, "Chicken Curry", DietType::NonVeg)
                .description("Spicy Indian curry")
                .ingredients(["chicken", "onion", "spices", "tomato"])
                .steps(["Fry onion", "Add chicken", "Cook with spices"])
                .build(),
            Recipe::builder(PANEER_BUTTER_MASALA, "Paneer Butter Masala", DietType::Veg)
                .description("Rich paneer gravy")
                .ingredients(["paneer", "butter", "tomato", "cream"])
                .steps(["Prepare gravy", "Add paneer", "Simmer"])
                .build(),
        ];
        Self { recipes }
    }

    /// Parse a JSON catalog: either an array of recipes or `{"recipes": [...]}`.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let recipes = match serde_json::from_str::<JsonCatalog>(json)? {
            JsonCatalog::List(recipes) => recipes,
            JsonCatalog::Document(doc) => doc.recipes,
        };
        Self::new(recipes)
    }

    /// Parse a TOML catalog with a `[[recipes]]` array of tables.
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let doc: CatalogDocument = toml::from_str(toml_str)?;
        Self::new(doc.recipes)
    }

    /// Load a catalog file; `.toml` files are parsed as TOML, anything else
    /// as JSON.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        let is_toml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        let catalog = if is_toml {
            Self::from_toml_str(&content)?
        } else {
            Self::from_json_str(&content)?
        };
        log::debug!(
            "Loaded {} recipes from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// All recipes in catalog order.
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Iterate recipes in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Recipe> {
        self.recipes.iter()
    }

    /// Look up a recipe by id.
    pub fn get(&self, id: RecipeId) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    /// Look up a recipe by id, failing with [`Error::RecipeNotFound`].
    pub fn require(&self, id: RecipeId) -> Result<&Recipe> {
        self.get(id).ok_or(Error::RecipeNotFound { id })
    }

    /// Number of recipes.
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Returns `true` if the catalog has no recipes.
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Recipe;
    type IntoIter = std::slice::Iter<'a, Recipe>;

    fn into_iter(self) -> Self::IntoIter {
        self.recipes.iter()
    }
}

const VEG_PASTA: RecipeId = builtin_id(1);
const CHICKEN_CURRY: RecipeId = builtin_id(2);
const PANEER_BUTTER_MASALA: RecipeId = builtin_id(3);

// Only called from const items, so a zero id fails the build.
#[allow(clippy::panic)]
const fn builtin_id(n: u32) -> RecipeId {
    match NonZeroU32::new(n) {
        Some(id) => RecipeId(id),
        None => panic!("builtin recipe ids start at 1"),
    }
}

// ============================================================================
// Tests
// ============================================================================
