//! Sort stage.
//!
//! Produces a new ordered list; the input slice is never reordered in place.
//! `az`/`za` use [`recipe_core::text::collate`] and a stable sort, so
//! equal titles keep their relative input order in both directions.

use recipe_core::Recipe;
use recipe_core::text::collate;

use crate::query::SortOrder;

/// Order a filtered list by the given sort order.
pub fn sort<'a>(list: &[&'a Recipe], order: SortOrder) -> Vec<&'a Recipe> {
    let mut sorted = list.to_vec();
    match order {
        SortOrder::Default => {}
        SortOrder::AToZ => sorted.sort_by(|a, b| collate(&a.title, &b.title)),
        SortOrder::ZToA => sorted.sort_by(|a, b| collate(&b.title, &a.title)),
    }
    sorted
}

// ============================================================================
// Tests
// ============================================================================
