//! The display pipeline.
//!
//! `visible = sort(filter(catalog, query, favorites), query.sort)`
//!
//! [`DisplayPipeline::compute`] is a pure function of its inputs: computing
//! twice with the same query and favorites yields the same [`View`].

use std::fmt;

use recipe_core::{Catalog, FavoriteSet, Recipe};
use recipe_query::{QueryState, filter, sort};
use serde::Serialize;

/// Visible/total recipe counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Count {
    /// Recipes left after filtering.
    pub visible: usize,
    /// Recipes in the catalog.
    pub total: usize,
}

impl fmt::Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Showing {} of {} recipes", self.visible, self.total)
    }
}

/// Result of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct View<'a> {
    /// Visible recipes in display order.
    pub recipes: Vec<&'a Recipe>,
    /// Counts for the count display.
    pub count: Count,
}

impl View<'_> {
    /// Titles of the visible recipes, in order.
    pub fn titles(&self) -> Vec<&str> {
        self.recipes.iter().map(|r| r.title.as_str()).collect()
    }
}

/// Filter → sort over a borrowed catalog.
#[derive(Debug, Clone, Copy)]
pub struct DisplayPipeline<'a> {
    catalog: &'a Catalog,
}

impl<'a> DisplayPipeline<'a> {
    /// Create a pipeline over `catalog`.
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// The catalog this pipeline reads.
    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Derive the visible list for the given query and favorites.
    pub fn compute<F>(&self, query: &QueryState, favorites: &F) -> View<'a>
    where
        F: FavoriteSet + ?Sized,
    {
        let filtered = filter(self.catalog, query, favorites);
        let recipes = sort(&filtered, query.sort);
        let count = Count {
            visible: recipes.len(),
            total: self.catalog.len(),
        };
        log::debug!(
            "Pipeline: filter={} sort={} search={:?} → {count}",
            query.filter,
            query.sort,
            query.search
        );
        View { recipes, count }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use recipe_core::RecipeId;
    use recipe_query::{CategoryFilter, SortOrder};

    const NO_FAVORITES: &[RecipeId] = &[];

    #[test]
    fn test_count_message() {
        let count = Count {
            visible: 2,
            total: 3,
        };
        assert_eq!(count.to_string(), "Showing 2 of 3 recipes");
    }

    #[test]
    fn test_default_query_shows_catalog() {
        let catalog = Catalog::builtin();
        let view = DisplayPipeline::new(&catalog).compute(&QueryState::default(), NO_FAVORITES);
        assert_eq!(
            view.titles(),
            vec!["Veg Pasta", "Chicken Curry", "Paneer Butter Masala"]
        );
        assert_eq!(view.count.to_string(), "Showing 3 of 3 recipes");
    }

    #[test]
    fn test_veg_za() {
        let catalog = Catalog::builtin();
        let query = QueryState {
            filter: CategoryFilter::Veg,
            sort: SortOrder::ZToA,
            ..Default::default()
        };
        let view = DisplayPipeline::new(&catalog).compute(&query, NO_FAVORITES);
        assert_eq!(view.titles(), vec!["Veg Pasta", "Paneer Butter Masala"]);
        assert_eq!(view.count.to_string(), "Showing 2 of 3 recipes");
    }

    #[test]
    fn test_compute_is_idempotent() {
        let catalog = Catalog::builtin();
        let pipeline = DisplayPipeline::new(&catalog);
        let query = QueryState {
            search: "tomato".to_string(),
            sort: SortOrder::AToZ,
            ..Default::default()
        };
        assert_eq!(
            pipeline.compute(&query, NO_FAVORITES),
            pipeline.compute(&query, NO_FAVORITES)
        );
    }

    #[test]
    fn test_view_serializes_recipes() {
        let catalog = Catalog::builtin();
        let query = QueryState {
            filter: CategoryFilter::NonVeg,
            ..Default::default()
        };
        let view = DisplayPipeline::new(&catalog).compute(&query, NO_FAVORITES);
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["count"]["visible"], 1);
        assert_eq!(json["recipes"][0]["title"], "Chicken Curry");
        assert_eq!(json["recipes"][0]["type"], "nonveg");
    }
}
