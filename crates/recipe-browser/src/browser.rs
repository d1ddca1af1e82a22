//! The session controller.
//!
//! [`RecipeBrowser`] is the single owner of the session state: the query
//! selections, the favorites store and the presenter. Every mutator updates
//! state and then re-runs the display pipeline, so the presenter always shows
//! the view for the current state.
//!
//! # Usage
//!
//! ```rust
//! use recipe_browser::{Count, Presenter, RecipeBrowser};
//! use recipe_core::{Catalog, FavoriteSet, Recipe};
//! use recipe_favorites::{FavoritesStore, MemoryStorage, FAVORITES_KEY};
//! use recipe_query::CategoryFilter;
//!
//! #[derive(Default)]
//! struct Counter(Option<Count>);
//!
//! impl Presenter for Counter {
//!     fn render(&mut self, _recipes: &[&Recipe], _favorites: &dyn FavoriteSet) {}
//!     fn show_count(&mut self, count: Count) {
//!         self.0 = Some(count);
//!     }
//! }
//!
//! let catalog = Catalog::builtin();
//! let favorites = FavoritesStore::open(MemoryStorage::new(), FAVORITES_KEY);
//! let mut browser = RecipeBrowser::new(&catalog, favorites, Counter::default());
//!
//! let view = browser.set_filter(CategoryFilter::NonVeg);
//! assert_eq!(view.count.to_string(), "Showing 1 of 3 recipes");
//! ```

use recipe_core::{Catalog, RecipeId};
use recipe_favorites::{FavoritesStore, Storage};
use recipe_query::{CategoryFilter, QueryState, SortOrder};

use crate::error::Result;
use crate::event::{Panel, UiEvent};
use crate::pipeline::{DisplayPipeline, View};
use crate::presenter::Presenter;

/// Owns query state, favorites and the presenter for one session.
pub struct RecipeBrowser<'a, P, S> {
    pipeline: DisplayPipeline<'a>,
    favorites: FavoritesStore<S>,
    query: QueryState,
    presenter: P,
    clear_visible: bool,
}

impl<'a, P: Presenter, S: Storage> RecipeBrowser<'a, P, S> {
    /// Create a browser with the default query state.
    pub fn new(catalog: &'a Catalog, favorites: FavoritesStore<S>, presenter: P) -> Self {
        Self {
            pipeline: DisplayPipeline::new(catalog),
            favorites,
            query: QueryState::default(),
            presenter,
            clear_visible: false,
        }
    }

    /// Start from a non-default query state (e.g. configured defaults).
    ///
    /// A query with search text shows the clear affordance right away.
    pub fn with_query(mut self, query: QueryState) -> Self {
        let visible = query.has_search();
        if visible != self.clear_visible {
            self.clear_visible = visible;
            self.presenter.set_clear_visible(visible);
        }
        self.query = query;
        self
    }

    /// Re-derive the visible list and hand it to the presenter.
    pub fn refresh(&mut self) -> View<'a> {
        let view = self.pipeline.compute(&self.query, &self.favorites);
        self.presenter.show_count(view.count);
        self.presenter.render(&view.recipes, &self.favorites);
        view
    }

    /// Select a category filter.
    pub fn set_filter(&mut self, filter: CategoryFilter) -> View<'a> {
        self.query.filter = filter;
        self.refresh()
    }

    /// Select a sort order.
    pub fn set_sort(&mut self, sort: SortOrder) -> View<'a> {
        self.query.sort = sort;
        self.refresh()
    }

    /// Commit search text (trimmed) and refresh.
    pub fn set_search(&mut self, raw: &str) -> View<'a> {
        self.query.search = raw.trim().to_string();
        self.refresh()
    }

    /// Record that the user typed into the search field.
    ///
    /// Shows the clear-search affordance immediately; the search itself is
    /// committed later through [`set_search`](Self::set_search).
    pub fn search_input(&mut self) {
        if !self.clear_visible {
            self.clear_visible = true;
            self.presenter.set_clear_visible(true);
        }
    }

    /// Empty the search, hide the clear affordance, and refresh.
    pub fn clear_search(&mut self) -> View<'a> {
        self.query.search.clear();
        if self.clear_visible {
            self.clear_visible = false;
            self.presenter.set_clear_visible(false);
        }
        self.refresh()
    }

    /// Toggle a recipe's favorite state, persist it, and refresh.
    ///
    /// # Errors
    ///
    /// Fails if `id` is not in the catalog or the favorites could not be
    /// written; in both cases nothing changes.
    pub fn toggle_favorite(&mut self, id: RecipeId) -> Result<View<'a>> {
        self.pipeline.catalog().require(id)?;
        self.favorites.toggle(id)?;
        Ok(self.refresh())
    }

    /// Flip a card panel. Does not re-run the pipeline.
    pub fn toggle_panel(&mut self, id: RecipeId, panel: Panel) {
        self.presenter.toggle_panel(id, panel);
    }

    /// Apply one UI event.
    ///
    /// `TextChanged` is committed immediately here; use
    /// [`Session`](crate::Session) for debounced search. Returns the new view
    /// for events that refresh the pipeline.
    pub fn handle(&mut self, event: UiEvent) -> Result<Option<View<'a>>> {
        let view = match event {
            UiEvent::FilterSelected(filter) => self.set_filter(filter),
            UiEvent::SortSelected(sort) => self.set_sort(sort),
            UiEvent::TextChanged(raw) => {
                self.search_input();
                self.set_search(&raw)
            }
            UiEvent::ClearRequested => self.clear_search(),
            UiEvent::FavoriteToggled(id) => self.toggle_favorite(id)?,
            UiEvent::PanelToggled(id, panel) => {
                self.toggle_panel(id, panel);
                return Ok(None);
            }
        };
        Ok(Some(view))
    }

    /// Current query state.
    pub fn query(&self) -> &QueryState {
        &self.query
    }

    /// The favorites store.
    pub fn favorites(&self) -> &FavoritesStore<S> {
        &self.favorites
    }

    /// The catalog being browsed.
    pub fn catalog(&self) -> &'a Catalog {
        self.pipeline.catalog()
    }

    /// Whether the clear-search affordance is showing.
    pub fn is_clear_visible(&self) -> bool {
        self.clear_visible
    }

    /// The presenter.
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Mutable access to the presenter.
    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }
}

impl<P, S> std::fmt::Debug for RecipeBrowser<'_, P, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecipeBrowser")
            .field("query", &self.query)
            .field("catalog.len", &self.pipeline.catalog().len())
            .field("clear_visible", &self.clear_visible)
            .finish()
    }
}
