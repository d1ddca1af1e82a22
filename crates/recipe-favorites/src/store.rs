//! The favorites store.
//!
//! A write-through set of favorite recipe ids. The set is read once from
//! storage when the store is opened and re-serialized to storage on every
//! toggle, before the toggle returns.
//!
//! The persisted form is a JSON array of positive integers under
//! [`FAVORITES_KEY`], e.g. `[2,3]`. Ids keep the order in which they were
//! favorited.
//!
//! # Usage
//!
//! ```rust
//! use recipe_core::RecipeId;
//! use recipe_favorites::{FavoritesStore, MemoryStorage, FAVORITES_KEY};
//!
//! let mut store = FavoritesStore::open(MemoryStorage::new(), FAVORITES_KEY);
//! let id = RecipeId::new(2).unwrap();
//!
//! assert!(store.toggle(id).unwrap());
//! assert_eq!(store.storage().get(FAVORITES_KEY), Some("[2]"));
//! ```

use recipe_core::{FavoriteSet, RecipeId};

use crate::error::Result;
use crate::storage::Storage;

/// Well-known storage slot holding the favorites array.
pub const FAVORITES_KEY: &str = "recipeFavorites";

/// Parse a persisted favorites value.
///
/// Returns `None` unless the value is a JSON array of positive integers.
/// Duplicates are dropped, first occurrence wins.
pub fn parse_favorites(raw: &str) -> Option<Vec<RecipeId>> {
    let parsed: Vec<RecipeId> = serde_json::from_str(raw).ok()?;
    let mut ids = Vec::with_capacity(parsed.len());
    for id in parsed {
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    Some(ids)
}

/// Write-through set of favorite recipe ids.
#[derive(Debug)]
pub struct FavoritesStore<S> {
    storage: S,
    key: String,
    ids: Vec<RecipeId>,
}

impl<S: Storage> FavoritesStore<S> {
    /// Open the store, loading the persisted set.
    ///
    /// Never fails: a missing, unreadable, or malformed slot yields an empty
    /// set.
    pub fn open(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let ids = match storage.read(&key) {
            Ok(Some(raw)) => parse_favorites(&raw).unwrap_or_else(|| {
                log::debug!("Ignoring malformed favorites in slot '{key}'");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                log::debug!("Favorites slot '{key}' unreadable ({e}), starting empty");
                Vec::new()
            }
        };
        log::debug!(
            "Loaded {} favorites from {} storage",
            ids.len(),
            storage.name()
        );
        Self { storage, key, ids }
    }

    /// Add `id` if absent, remove it if present, then persist the full set.
    ///
    /// Returns whether `id` is a favorite after the toggle.
    ///
    /// # Errors
    ///
    /// If the storage write fails the in-memory set is restored, so memory
    /// and storage never disagree.
    pub fn toggle(&mut self, id: RecipeId) -> Result<bool> {
        let previous = self.ids.clone();
        let now_favorite = match self.ids.iter().position(|f| *f == id) {
            Some(index) => {
                self.ids.remove(index);
                false
            }
            None => {
                self.ids.push(id);
                true
            }
        };

        if let Err(e) = self.persist() {
            log::warn!("Failed to persist favorites after toggling {id}: {e}");
            self.ids = previous;
            return Err(e);
        }

        log::info!(
            "Recipe {id} {} favorites",
            if now_favorite { "added to" } else { "removed from" }
        );
        Ok(now_favorite)
    }

    fn persist(&mut self) -> Result<()> {
        let value = serde_json::to_string(&self.ids)?;
        self.storage.write(&self.key, &value)
    }

    /// Returns `true` if `id` is a favorite.
    pub fn contains(&self, id: RecipeId) -> bool {
        self.ids.contains(&id)
    }

    /// Favorite ids in the order they were added.
    pub fn ids(&self) -> &[RecipeId] {
        &self.ids
    }

    /// Number of favorites.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` if there are no favorites.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Storage slot key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The underlying storage backend.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Mutable access to the storage backend.
    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }
}

impl<S: Storage> FavoriteSet for FavoritesStore<S> {
    fn is_favorite(&self, id: RecipeId) -> bool {
        self.contains(id)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::storage::{FileStorage, MemoryStorage};
    use proptest::prelude::*;

    fn id(n: u32) -> RecipeId {
        RecipeId::new(n).unwrap()
    }

    #[test]
    fn test_parse_favorites() {
        assert_eq!(parse_favorites("[]"), Some(vec![]));
        assert_eq!(parse_favorites("[2, 3]"), Some(vec![id(2), id(3)]));
        assert_eq!(parse_favorites("[3, 2, 3]"), Some(vec![id(3), id(2)]));
    }

    #[test]
    fn test_parse_favorites_rejects_wrong_shapes() {
        for raw in ["{oops", "[\"a\"]", "[0]", "{}", "null", "[-1]", "2", "[1.5]"] {
            assert_eq!(parse_favorites(raw), None, "accepted {raw}");
        }
    }

    #[test]
    fn test_open_missing_is_empty() {
        let store = FavoritesStore::open(MemoryStorage::new(), FAVORITES_KEY);
        assert!(store.is_empty());
        assert_eq!(store.key(), FAVORITES_KEY);
    }

    #[test]
    fn test_open_malformed_is_empty() {
        for raw in ["{oops", "[\"a\"]", "[0]", "{}"] {
            let storage = MemoryStorage::with_value(FAVORITES_KEY, raw);
            let store = FavoritesStore::open(storage, FAVORITES_KEY);
            assert!(store.is_empty(), "loaded favorites from {raw}");
        }
    }

    #[test]
    fn test_open_unreadable_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(crate::storage::STORAGE_FILE), "garbage").unwrap();
        let store = FavoritesStore::open(FileStorage::new(dir.path()), FAVORITES_KEY);
        assert!(store.is_empty());
    }

    #[test]
    fn test_open_existing() {
        let storage = MemoryStorage::with_value(FAVORITES_KEY, "[3,1]");
        let store = FavoritesStore::open(storage, FAVORITES_KEY);
        assert_eq!(store.ids(), &[id(3), id(1)]);
        assert!(store.is_favorite(id(1)));
        assert!(!store.is_favorite(id(2)));
    }

    #[test]
    fn test_toggle_adds_and_persists() {
        let mut store = FavoritesStore::open(MemoryStorage::new(), FAVORITES_KEY);
        assert!(store.toggle(id(2)).unwrap());
        assert_eq!(store.ids(), &[id(2)]);
        assert_eq!(store.storage().get(FAVORITES_KEY), Some("[2]"));
        assert_eq!(store.storage().write_count(), 1);
    }

    #[test]
    fn test_toggle_removes_and_keeps_order() {
        let storage = MemoryStorage::with_value(FAVORITES_KEY, "[1,2,3]");
        let mut store = FavoritesStore::open(storage, FAVORITES_KEY);
        assert!(!store.toggle(id(2)).unwrap());
        assert_eq!(store.storage().get(FAVORITES_KEY), Some("[1,3]"));
        assert!(store.toggle(id(2)).unwrap());
        assert_eq!(store.storage().get(FAVORITES_KEY), Some("[1,3,2]"));
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        let mut store = FavoritesStore::open(MemoryStorage::new(), FAVORITES_KEY);
        store.toggle(id(1)).unwrap();
        let before = store.ids().to_vec();
        let writes_before = store.storage().write_count();

        store.toggle(id(3)).unwrap();
        store.toggle(id(3)).unwrap();

        assert_eq!(store.ids(), before.as_slice());
        assert_eq!(store.storage().write_count() - writes_before, 2);
    }

    #[test]
    fn test_toggle_rolls_back_on_write_failure() {
        let mut store = FavoritesStore::open(MemoryStorage::new(), FAVORITES_KEY);
        store.storage_mut().set_fail_writes(true);

        let err = store.toggle(id(2)).unwrap_err();
        assert!(matches!(err, Error::Storage { .. }));
        assert!(store.is_empty());
        assert_eq!(store.storage().get(FAVORITES_KEY), None);
    }

    #[test]
    fn test_file_storage_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut store = FavoritesStore::open(FileStorage::new(dir.path()), FAVORITES_KEY);
            store.toggle(id(2)).unwrap();
            store.toggle(id(3)).unwrap();
        }
        let store = FavoritesStore::open(FileStorage::new(dir.path()), FAVORITES_KEY);
        assert_eq!(store.ids(), &[id(2), id(3)]);
    }

    proptest! {
        #[test]
        fn test_memory_matches_storage_after_any_history(
            toggles in prop::collection::vec(1u32..6, 0..20),
        ) {
            let mut store = FavoritesStore::open(MemoryStorage::new(), FAVORITES_KEY);
            for n in &toggles {
                store.toggle(id(*n)).unwrap();
            }
            let persisted = store
                .storage()
                .get(FAVORITES_KEY)
                .map(|raw| parse_favorites(raw).unwrap())
                .unwrap_or_default();
            prop_assert_eq!(persisted.as_slice(), store.ids());
            prop_assert_eq!(store.storage().write_count(), toggles.len());

            for n in 1u32..6 {
                let count = toggles.iter().filter(|t| **t == n).count();
                prop_assert_eq!(store.contains(id(n)), count % 2 == 1);
            }
        }
    }
}
