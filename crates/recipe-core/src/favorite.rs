//! Favorite membership.
//!
//! The filter stage and presentation layer only need to ask "is this recipe a
//! favorite?", so they take a [`FavoriteSet`] rather than the store that
//! persists it.

use std::collections::{BTreeSet, HashSet};

use crate::recipe::RecipeId;

/// Read-only view of a set of favorite recipe ids.
pub trait FavoriteSet {
    /// Returns `true` if `id` is marked as a favorite.
    fn is_favorite(&self, id: RecipeId) -> bool;
}

impl FavoriteSet for [RecipeId] {
    fn is_favorite(&self, id: RecipeId) -> bool {
        self.contains(&id)
    }
}

impl FavoriteSet for Vec<RecipeId> {
    fn is_favorite(&self, id: RecipeId) -> bool {
        self.contains(&id)
    }
}

impl FavoriteSet for HashSet<RecipeId> {
    fn is_favorite(&self, id: RecipeId) -> bool {
        self.contains(&id)
    }
}

impl FavoriteSet for BTreeSet<RecipeId> {
    fn is_favorite(&self, id: RecipeId) -> bool {
        self.contains(&id)
    }
}

impl<T: FavoriteSet + ?Sized> FavoriteSet for &T {
    fn is_favorite(&self, id: RecipeId) -> bool {
        (**self).is_favorite(id)
    }
}
