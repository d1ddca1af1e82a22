//! Filter stage.
//!
//! Narrows the catalog in two fixed steps:
//!
//! 1. **Search**: keep a recipe if the folded query is a substring of its
//!    folded title, description, or any ingredient. A blank query keeps
//!    everything.
//! 2. **Category**: `all` keeps everything, `veg`/`nonveg` keep the matching
//!    diet type, `favorites` keeps recipes in the favorites set.
//!
//! Search always runs before the category step; the count and the rendered
//! list are both taken from the fully narrowed result.

use recipe_core::text::contains_folded;
use recipe_core::{Catalog, FavoriteSet, Recipe};

use crate::query::{CategoryFilter, QueryState};

/// Returns `true` if the recipe matches an already-folded search string.
pub fn matches_search(recipe: &Recipe, folded_query: &str) -> bool {
    contains_folded(&recipe.title, folded_query)
        || contains_folded(&recipe.description, folded_query)
        || recipe
            .ingredients
            .iter()
            .any(|i| contains_folded(i, folded_query))
}

/// Returns `true` if the recipe passes the category filter.
pub fn matches_category<F>(recipe: &Recipe, filter: CategoryFilter, favorites: &F) -> bool
where
    F: FavoriteSet + ?Sized,
{
    match filter {
        CategoryFilter::All => true,
        CategoryFilter::Veg | CategoryFilter::NonVeg => filter.diet() == Some(recipe.diet),
        CategoryFilter::Favorites => favorites.is_favorite(recipe.id),
    }
}

/// Apply the search and category filters to the catalog.
///
/// The result borrows from the catalog and keeps catalog order.
pub fn filter<'a, F>(catalog: &'a Catalog, query: &QueryState, favorites: &F) -> Vec<&'a Recipe>
where
    F: FavoriteSet + ?Sized,
{
    let searched: Vec<&Recipe> = match query.folded_search() {
        Some(q) => catalog.iter().filter(|r| matches_search(r, &q)).collect(),
        None => catalog.iter().collect(),
    };

    searched
        .into_iter()
        .filter(|r| matches_category(r, query.filter, favorites))
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
