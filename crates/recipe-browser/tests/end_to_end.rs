//! End-to-end display pipeline scenarios over the builtin catalog.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;

use common::{RecordingPresenter, browser, id};
use recipe_browser::{Panel, RecipeBrowser, UiEvent};
use recipe_core::Catalog;
use recipe_favorites::{FAVORITES_KEY, FavoritesStore, MemoryStorage, parse_favorites};
use recipe_query::{CategoryFilter, QueryState, SortOrder};

#[test]
fn veg_filter_sorted_z_to_a() {
    let catalog = Catalog::builtin();
    let mut browser = browser(&catalog);

    browser.set_filter(CategoryFilter::Veg);
    let view = browser.set_sort(SortOrder::ZToA);

    assert_eq!(view.titles(), vec!["Veg Pasta", "Paneer Butter Masala"]);
    assert_eq!(view.count.to_string(), "Showing 2 of 3 recipes");
    assert_eq!(
        browser.presenter().last_titles(),
        vec!["Veg Pasta", "Paneer Butter Masala"]
    );
    assert_eq!(
        browser.presenter().last_count_message().as_deref(),
        Some("Showing 2 of 3 recipes")
    );
}

#[test]
fn search_cream_matches_ingredients() {
    let catalog = Catalog::builtin();
    let mut browser = browser(&catalog);

    let view = browser.set_search("cream");

    assert_eq!(view.titles(), vec!["Veg Pasta", "Paneer Butter Masala"]);
    assert_eq!(view.count.to_string(), "Showing 2 of 3 recipes");
}

#[test]
fn toggle_favorite_persists_and_filters() {
    let catalog = Catalog::builtin();
    let mut browser = browser(&catalog);

    browser.toggle_favorite(id(2)).unwrap();
    assert_eq!(browser.favorites().ids(), &[id(2)]);
    assert_eq!(browser.favorites().storage().get(FAVORITES_KEY), Some("[2]"));

    let view = browser.set_filter(CategoryFilter::Favorites);
    assert_eq!(view.titles(), vec!["Chicken Curry"]);
    assert_eq!(view.count.to_string(), "Showing 1 of 3 recipes");
}

#[test]
fn toggle_twice_restores_state_with_two_writes() {
    let catalog = Catalog::builtin();
    let mut browser = browser(&catalog);

    browser.toggle_favorite(id(3)).unwrap();
    browser.toggle_favorite(id(3)).unwrap();

    assert!(browser.favorites().is_empty());
    assert_eq!(browser.favorites().storage().write_count(), 2);
    assert_eq!(browser.favorites().storage().get(FAVORITES_KEY), Some("[]"));
}

#[test]
fn favorites_filter_tracks_any_history() {
    let catalog = Catalog::builtin();
    let mut browser = browser(&catalog);
    browser.set_filter(CategoryFilter::Favorites);

    for n in [1, 3, 1, 2, 3, 3] {
        let view = browser.toggle_favorite(id(n)).unwrap();
        let stored = parse_favorites(browser.favorites().storage().get(FAVORITES_KEY).unwrap())
            .unwrap();
        let expected: Vec<_> = catalog
            .iter()
            .filter(|r| stored.contains(&r.id))
            .map(|r| r.title.as_str())
            .collect();
        assert_eq!(view.titles(), expected);
    }
}

#[test]
fn rendered_cards_carry_favorite_state() {
    let catalog = Catalog::builtin();
    let mut browser = browser(&catalog);

    browser.toggle_favorite(id(1)).unwrap();
    let frame = browser.presenter().frames.last().unwrap().clone();
    assert_eq!(frame.favorites, vec![true, false, false]);
}

#[test]
fn refresh_is_idempotent() {
    let catalog = Catalog::builtin();
    let mut browser = browser(&catalog);
    browser.set_search("tomato");
    browser.set_sort(SortOrder::AToZ);

    let first = browser.refresh();
    let second = browser.refresh();
    assert_eq!(first, second);

    let frames = &browser.presenter().frames;
    let n = frames.len();
    assert_eq!(frames[n - 1], frames[n - 2]);
    let counts = &browser.presenter().counts;
    assert_eq!(counts[counts.len() - 1], counts[counts.len() - 2]);
}

#[test]
fn unknown_recipe_toggle_changes_nothing() {
    let catalog = Catalog::builtin();
    let mut browser = browser(&catalog);

    let err = browser.toggle_favorite(id(42)).unwrap_err();
    assert!(err.to_string().contains("Recipe not found: 42"));
    assert_eq!(browser.favorites().storage().write_count(), 0);
    assert!(browser.presenter().frames.is_empty());
}

#[test]
fn failed_write_leaves_favorites_unchanged() {
    let catalog = Catalog::builtin();
    let mut storage = MemoryStorage::new();
    storage.set_fail_writes(true);
    let favorites = FavoritesStore::open(storage, FAVORITES_KEY);
    let mut browser = RecipeBrowser::new(&catalog, favorites, RecordingPresenter::default());

    assert!(browser.toggle_favorite(id(1)).is_err());
    assert!(browser.favorites().is_empty());
}

#[test]
fn malformed_storage_starts_empty() {
    let catalog = Catalog::builtin();
    let favorites = FavoritesStore::open(
        MemoryStorage::with_value(FAVORITES_KEY, "{oops"),
        FAVORITES_KEY,
    );
    let mut browser = RecipeBrowser::new(&catalog, favorites, RecordingPresenter::default());

    let view = browser.set_filter(CategoryFilter::Favorites);
    assert!(view.recipes.is_empty());
    assert_eq!(view.count.to_string(), "Showing 0 of 3 recipes");
}

#[test]
fn panel_toggle_does_not_refresh() {
    let catalog = Catalog::builtin();
    let mut browser = browser(&catalog);
    browser.refresh();

    let result = browser
        .handle(UiEvent::PanelToggled(id(1), Panel::Steps))
        .unwrap();
    assert!(result.is_none());
    assert_eq!(browser.presenter().frames.len(), 1);
    assert_eq!(browser.presenter().panels, vec![(id(1), Panel::Steps)]);
}

#[test]
fn handle_routes_events() {
    let catalog = Catalog::builtin();
    let mut browser = browser(&catalog);

    let view = browser
        .handle(UiEvent::FilterSelected(CategoryFilter::NonVeg))
        .unwrap()
        .unwrap();
    assert_eq!(view.titles(), vec!["Chicken Curry"]);

    browser
        .handle(UiEvent::FilterSelected(CategoryFilter::All))
        .unwrap();
    let view = browser
        .handle(UiEvent::SortSelected(SortOrder::AToZ))
        .unwrap()
        .unwrap();
    assert_eq!(
        view.titles(),
        vec!["Chicken Curry", "Paneer Butter Masala", "Veg Pasta"]
    );

    let view = browser
        .handle(UiEvent::TextChanged("  PANEER ".to_string()))
        .unwrap()
        .unwrap();
    assert_eq!(view.titles(), vec!["Paneer Butter Masala"]);
    assert_eq!(browser.query().search, "PANEER");
    assert!(browser.is_clear_visible());

    let view = browser.handle(UiEvent::ClearRequested).unwrap().unwrap();
    assert_eq!(view.count.visible, 3);
    assert!(!browser.is_clear_visible());
    assert_eq!(browser.presenter().clear_visible, vec![true, false]);
}

#[test]
fn configured_initial_query() {
    let catalog = Catalog::builtin();
    let favorites = FavoritesStore::open(MemoryStorage::new(), FAVORITES_KEY);
    let mut browser = RecipeBrowser::new(&catalog, favorites, RecordingPresenter::default())
        .with_query(QueryState {
            sort: SortOrder::AToZ,
            ..Default::default()
        });

    let view = browser.refresh();
    assert_eq!(view.titles()[0], "Chicken Curry");
}

#[test]
fn initial_search_shows_clear_affordance() {
    let catalog = Catalog::builtin();
    let favorites = FavoritesStore::open(MemoryStorage::new(), FAVORITES_KEY);
    let mut browser = RecipeBrowser::new(&catalog, favorites, RecordingPresenter::default())
        .with_query(QueryState {
            search: "pasta".into(),
            ..Default::default()
        });

    assert!(browser.is_clear_visible());
    assert_eq!(browser.presenter().clear_visible, vec![true]);

    // Typing more does not announce it twice; clearing hides it.
    browser.search_input();
    browser.clear_search();
    assert_eq!(browser.presenter().clear_visible, vec![true, false]);
}
