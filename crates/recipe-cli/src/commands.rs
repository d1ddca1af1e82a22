//! One-shot commands.
//!
//! Each command writes its result to the given writer so it can be tested
//! against an in-memory buffer.

use std::io::Write;

use recipe_browser::{DisplayPipeline, Presenter, RecipeBrowser};
use recipe_core::{Catalog, RecipeId};
use recipe_favorites::{FavoritesStore, Storage};
use recipe_query::QueryState;

use crate::cli::ListArgs;
use crate::config::BrowserConfig;
use crate::error::Result;
use crate::render::TextPresenter;

/// Build the query for `list` from configured defaults and flags.
pub fn list_query(config: &BrowserConfig, args: &ListArgs) -> QueryState {
    let mut query = config.initial_query();
    if let Some(filter) = args.filter {
        query.filter = filter;
    }
    if let Some(sort) = args.sort {
        query.sort = sort;
    }
    if let Some(search) = &args.search {
        query.search = search.trim().to_string();
    }
    query
}

/// `list`: print the count and collapsed cards, or the view as JSON.
pub fn cmd_list<S: Storage, W: Write>(
    catalog: &Catalog,
    favorites: FavoritesStore<S>,
    query: QueryState,
    json: bool,
    out: &mut W,
) -> Result<()> {
    if json {
        let view = DisplayPipeline::new(catalog).compute(&query, &favorites);
        serde_json::to_writer_pretty(&mut *out, &view)?;
        writeln!(out)?;
        return Ok(());
    }

    let mut browser =
        RecipeBrowser::new(catalog, favorites, TextPresenter::new(&mut *out)).with_query(query);
    browser.refresh();
    Ok(())
}

/// `show`: print one recipe with both panels expanded.
pub fn cmd_show<S: Storage, W: Write>(
    catalog: &Catalog,
    favorites: &FavoritesStore<S>,
    id: RecipeId,
    out: &mut W,
) -> Result<()> {
    let recipe = catalog.require(id)?;
    let mut presenter = TextPresenter::new(&mut *out).expand_all(true);
    presenter.render(&[recipe], favorites);
    Ok(())
}

/// `favorite`: toggle one recipe and report its new state.
pub fn cmd_favorite<S: Storage, W: Write>(
    catalog: &Catalog,
    favorites: &mut FavoritesStore<S>,
    id: RecipeId,
    out: &mut W,
) -> Result<()> {
    let recipe = catalog.require(id)?;
    let now_favorite = favorites.toggle(id)?;
    let verb = if now_favorite {
        "added to"
    } else {
        "removed from"
    };
    writeln!(out, "{} [{}] {verb} favorites", recipe.title, recipe.id)?;
    Ok(())
}

/// `favorites`: list favorites in the order they were added.
///
/// Stored ids missing from the catalog are listed as unknown.
pub fn cmd_favorites<S: Storage, W: Write>(
    catalog: &Catalog,
    favorites: &FavoritesStore<S>,
    out: &mut W,
) -> Result<()> {
    if favorites.is_empty() {
        writeln!(out, "No favorites yet")?;
        return Ok(());
    }
    for &id in favorites.ids() {
        match catalog.get(id) {
            Some(recipe) => writeln!(out, "[{id}] {}", recipe.title)?,
            None => writeln!(out, "[{id}] (not in catalog)")?,
        }
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
