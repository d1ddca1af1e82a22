//! The recipe record and its identifier and diet types.

use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Stable identity key of a recipe.
///
/// Always a positive integer; zero is rejected both at construction and
/// when deserializing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(pub(crate) NonZeroU32);

impl RecipeId {
    /// Creates a recipe id, returning `None` for zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use recipe_core::RecipeId;
    ///
    /// assert_eq!(RecipeId::new(2).map(RecipeId::get), Some(2));
    /// assert!(RecipeId::new(0).is_none());
    /// ```
    pub fn new(id: u32) -> Option<Self> {
        NonZeroU32::new(id).map(Self)
    }

    /// Returns the numeric value.
    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecipeId {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| Error::parse("recipe id", s))
    }
}

/// Dietary category of a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DietType {
    /// Vegetarian.
    Veg,
    /// Contains meat or fish.
    NonVeg,
}

impl DietType {
    /// Wire name of the diet type.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Veg => "veg",
            Self::NonVeg => "nonveg",
        }
    }
}

impl fmt::Display for DietType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DietType {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "veg" => Ok(Self::Veg),
            "nonveg" => Ok(Self::NonVeg),
            _ => Err(Error::parse("diet type", s)),
        }
    }
}

/// A single recipe in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Unique identifier.
    pub id: RecipeId,
    /// Display title.
    pub title: String,
    /// Dietary category.
    #[serde(rename = "type")]
    pub diet: DietType,
    /// One-line description.
    #[serde(default)]
    pub description: String,
    /// Ingredients in display order.
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Preparation steps in display order.
    #[serde(default)]
    pub steps: Vec<String>,
}

impl Recipe {
    /// Starts building a recipe with the required fields.
    pub fn builder(id: RecipeId, title: impl Into<String>, diet: DietType) -> RecipeBuilder {
        RecipeBuilder {
            recipe: Recipe {
                id,
                title: title.into(),
                diet,
                description: String::new(),
                ingredients: Vec::new(),
                steps: Vec::new(),
            },
        }
    }
}

/// Builder for [`Recipe`].
#[derive(Debug, Clone)]
pub struct RecipeBuilder {
    recipe: Recipe,
}

impl RecipeBuilder {
    /// Set the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.recipe.description = description.into();
        self
    }

    /// Append one ingredient.
    pub fn ingredient(mut self, ingredient: impl Into<String>) -> Self {
        self.recipe.ingredients.push(ingredient.into());
        self
    }

    /// Append several ingredients.
    pub fn ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.recipe
            .ingredients
            .extend(ingredients.into_iter().map(Into::into));
        self
    }

    /// Append several steps.
    pub fn steps<I, S>(mut self, steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.recipe.steps.extend(steps.into_iter().map(Into::into));
        self
    }

    /// Finish building.
    pub fn build(self) -> Recipe {
        self.recipe
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_id_rejects_zero() {
        assert!(RecipeId::new(0).is_none());
        assert_eq!(RecipeId::new(7).unwrap().get(), 7);
    }

    #[test]
    fn test_recipe_id_from_str() {
        assert_eq!("12".parse::<RecipeId>().unwrap().get(), 12);
        assert_eq!(" 3 ".parse::<RecipeId>().unwrap().get(), 3);
        assert!("0".parse::<RecipeId>().is_err());
        assert!("-1".parse::<RecipeId>().is_err());
        assert!("abc".parse::<RecipeId>().is_err());
    }

    #[test]
    fn test_recipe_id_serde_transparent() {
        let id = RecipeId::new(5).unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "5");
        let back: RecipeId = serde_json::from_str("5").unwrap();
        assert_eq!(back, id);
        assert!(serde_json::from_str::<RecipeId>("0").is_err());
    }

    #[test]
    fn test_diet_type_wire_names() {
        assert_eq!(serde_json::to_string(&DietType::NonVeg).unwrap(), "\"nonveg\"");
        assert_eq!("VEG".parse::<DietType>().unwrap(), DietType::Veg);
        assert!("vegan".parse::<DietType>().is_err());
    }

    #[test]
    fn test_recipe_deserialize_type_field() {
        let json = r#"{
            "id": 9,
            "title": "Dal",
            "type": "veg",
            "ingredients": ["lentils"]
        }"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.diet, DietType::Veg);
        assert_eq!(recipe.description, "");
        assert_eq!(recipe.ingredients, vec!["lentils"]);
        assert!(recipe.steps.is_empty());
    }

    #[test]
    fn test_builder() {
        let recipe = Recipe::builder(RecipeId::new(1).unwrap(), "Toast", DietType::Veg)
            .description("Crunchy")
            .ingredient("bread")
            .ingredients(["butter"])
            .steps(["Toast bread", "Spread butter"])
            .build();
        assert_eq!(recipe.ingredients, vec!["bread", "butter"]);
        assert_eq!(recipe.steps.len(), 2);
        assert_eq!(recipe.description, "Crunchy");
    }
}
