//! Common test utilities for recipe-browser integration tests.

#![allow(dead_code)]

use recipe_browser::{Count, Panel, Presenter, RecipeBrowser};
use recipe_core::{Catalog, FavoriteSet, Recipe, RecipeId};
use recipe_favorites::{FAVORITES_KEY, FavoritesStore, MemoryStorage};

/// One rendered frame: titles with their favorite flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub titles: Vec<String>,
    pub favorites: Vec<bool>,
}

/// Presenter that records everything it is asked to show.
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    pub frames: Vec<Frame>,
    pub counts: Vec<Count>,
    pub clear_visible: Vec<bool>,
    pub panels: Vec<(RecipeId, Panel)>,
    pub notices: Vec<String>,
}

impl RecordingPresenter {
    pub fn last_titles(&self) -> Vec<String> {
        self.frames
            .last()
            .map(|f| f.titles.clone())
            .unwrap_or_default()
    }

    pub fn last_count_message(&self) -> Option<String> {
        self.counts.last().map(ToString::to_string)
    }
}

impl Presenter for RecordingPresenter {
    fn render(&mut self, recipes: &[&Recipe], favorites: &dyn FavoriteSet) {
        self.frames.push(Frame {
            titles: recipes.iter().map(|r| r.title.clone()).collect(),
            favorites: recipes.iter().map(|r| favorites.is_favorite(r.id)).collect(),
        });
    }

    fn show_count(&mut self, count: Count) {
        self.counts.push(count);
    }

    fn set_clear_visible(&mut self, visible: bool) {
        self.clear_visible.push(visible);
    }

    fn toggle_panel(&mut self, id: RecipeId, panel: Panel) {
        self.panels.push((id, panel));
    }

    fn notify(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }
}

pub fn id(n: u32) -> RecipeId {
    RecipeId::new(n).unwrap()
}

/// Browser over `catalog` with empty in-memory favorites.
pub fn browser(catalog: &Catalog) -> RecipeBrowser<'_, RecordingPresenter, MemoryStorage> {
    let favorites = FavoritesStore::open(MemoryStorage::new(), FAVORITES_KEY);
    RecipeBrowser::new(catalog, favorites, RecordingPresenter::default())
}
