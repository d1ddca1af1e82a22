//! Plain-text presenter.
//!
//! Draws recipe cards as indented text blocks:
//!
//! ```text
//! ♥ [1] Veg Pasta (veg)
//!     Creamy delicious pasta
//!     ▸ Show Ingredients
//!     ▸ Show Steps
//! ```
//!
//! Panel state is kept here and keyed by recipe and panel. A fresh render
//! collapses every panel.

use std::collections::HashSet;
use std::fmt::Write as _;
use std::io::Write;

use recipe_browser::{Count, Panel, Presenter};
use recipe_core::{FavoriteSet, Recipe, RecipeId};

const FAVORITE_MARK: char = '♥';
const NOT_FAVORITE_MARK: char = '♡';

/// Format one card.
fn format_card(recipe: &Recipe, favorite: bool, ingredients: bool, steps: bool) -> String {
    let mark = if favorite {
        FAVORITE_MARK
    } else {
        NOT_FAVORITE_MARK
    };
    let mut out = format!(
        "{mark} [{}] {} ({})\n",
        recipe.id,
        recipe.title,
        recipe.diet.as_str()
    );
    if !recipe.description.is_empty() {
        let _ = writeln!(out, "    {}", recipe.description);
    }

    push_panel(&mut out, Panel::Ingredients, ingredients, |out| {
        for item in &recipe.ingredients {
            let _ = writeln!(out, "        • {item}");
        }
    });
    push_panel(&mut out, Panel::Steps, steps, |out| {
        for (n, step) in recipe.steps.iter().enumerate() {
            let _ = writeln!(out, "        {}. {step}", n + 1);
        }
    });
    out
}

fn push_panel(out: &mut String, panel: Panel, open: bool, body: impl FnOnce(&mut String)) {
    if open {
        let _ = writeln!(out, "    ▾ Hide {}", panel.label());
        body(out);
    } else {
        let _ = writeln!(out, "    ▸ Show {}", panel.label());
    }
}

/// A rendered card: the recipe and its favorite state at render time.
#[derive(Debug, Clone)]
struct Card {
    recipe: Recipe,
    favorite: bool,
}

/// [`Presenter`] writing text to any [`Write`] sink.
#[derive(Debug)]
pub struct TextPresenter<W> {
    out: W,
    cards: Vec<Card>,
    expanded: HashSet<(RecipeId, Panel)>,
    expand_all: bool,
}

impl<W: Write> TextPresenter<W> {
    /// Presenter writing to `out`.
    pub fn new(out: W) -> Self {
        Self {
            out,
            cards: Vec::new(),
            expanded: HashSet::new(),
            expand_all: false,
        }
    }

    /// Render every card with both panels expanded.
    pub fn expand_all(mut self, expand: bool) -> Self {
        self.expand_all = expand;
        self
    }

    /// Returns `true` if `panel` of card `id` is currently expanded.
    fn is_expanded(&self, id: RecipeId, panel: Panel) -> bool {
        self.expand_all || self.expanded.contains(&(id, panel))
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }

    fn card_text(&self, card: &Card) -> String {
        let id = card.recipe.id;
        format_card(
            &card.recipe,
            card.favorite,
            self.is_expanded(id, Panel::Ingredients),
            self.is_expanded(id, Panel::Steps),
        )
    }

    fn emit(&mut self, text: &str) {
        if let Err(e) = self
            .out
            .write_all(text.as_bytes())
            .and_then(|()| self.out.flush())
        {
            log::warn!("Failed to write output: {e}");
        }
    }
}

impl<W: Write> Presenter for TextPresenter<W> {
    fn render(&mut self, recipes: &[&Recipe], favorites: &dyn FavoriteSet) {
        self.expanded.clear();
        self.cards = recipes
            .iter()
            .map(|r| Card {
                recipe: (*r).clone(),
                favorite: favorites.is_favorite(r.id),
            })
            .collect();

        let text = self
            .cards
            .iter()
            .map(|card| self.card_text(card))
            .collect::<Vec<_>>()
            .join("\n");
        self.emit(&text);
    }

    fn show_count(&mut self, count: Count) {
        self.emit(&format!("{count}\n\n"));
    }

    fn set_clear_visible(&mut self, visible: bool) {
        if visible {
            self.emit("[×] clear search\n");
        }
    }

    fn toggle_panel(&mut self, id: RecipeId, panel: Panel) {
        let Some(card) = self.cards.iter().find(|c| c.recipe.id == id).cloned() else {
            self.notify(&format!("Recipe {id} is not on screen"));
            return;
        };
        if !self.expanded.remove(&(id, panel)) {
            self.expanded.insert((id, panel));
        }
        let text = self.card_text(&card);
        self.emit(&text);
    }

    fn notify(&mut self, message: &str) {
        self.emit(&format!("! {message}\n"));
    }
}

// ============================================================================
// Tests
// ============================================================================
