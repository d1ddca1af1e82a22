//! The presentation layer seam.
//!
//! The browser never draws anything itself. It hands each computed view to a
//! [`Presenter`], together with the favorites set so cards can mark their
//! favorite state.

use recipe_core::{FavoriteSet, Recipe, RecipeId};

use crate::event::Panel;
use crate::pipeline::Count;

/// Renders recipe cards and the count display.
pub trait Presenter {
    /// Replace the rendered cards with `recipes`, in order.
    ///
    /// Every card starts with both panels collapsed.
    fn render(&mut self, recipes: &[&Recipe], favorites: &dyn FavoriteSet);

    /// Update the count display.
    fn show_count(&mut self, count: Count);

    /// Show or hide the clear-search affordance.
    fn set_clear_visible(&mut self, _visible: bool) {}

    /// Flip one panel of one rendered card. Purely local; no refresh.
    fn toggle_panel(&mut self, _id: RecipeId, _panel: Panel) {}

    /// Surface a non-fatal problem (e.g. an unknown recipe id).
    fn notify(&mut self, message: &str) {
        log::warn!("{message}");
    }
}

impl<P: Presenter + ?Sized> Presenter for &mut P {
    fn render(&mut self, recipes: &[&Recipe], favorites: &dyn FavoriteSet) {
        (**self).render(recipes, favorites);
    }

    fn show_count(&mut self, count: Count) {
        (**self).show_count(count);
    }

    fn set_clear_visible(&mut self, visible: bool) {
        (**self).set_clear_visible(visible);
    }

    fn toggle_panel(&mut self, id: RecipeId, panel: Panel) {
        (**self).toggle_panel(id, panel);
    }

    fn notify(&mut self, message: &str) {
        (**self).notify(message);
    }
}
