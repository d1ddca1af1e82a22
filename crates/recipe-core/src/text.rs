//! Case folding and locale-aware collation.
//!
//! Search compares case-folded text by substring. Title ordering uses a
//! multi-level comparison so that case and diacritics order naturally
//! ("apple" < "Banana" < "éclair" < "Zucchini") instead of by raw bytes.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Case-fold text for case-insensitive comparison.
pub fn fold(text: &str) -> String {
    text.to_lowercase()
}

/// Case-insensitive substring test.
///
/// `folded_needle` must already be folded with [`fold`].
pub fn contains_folded(haystack: &str, folded_needle: &str) -> bool {
    fold(haystack).contains(folded_needle)
}

/// Primary collation key: decomposed, combining marks stripped, lowercased.
pub fn collation_key(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Compare two strings the way a human-facing sorted list expects.
///
/// 1. Base letters, ignoring case and accents.
/// 2. Accents (unaccented first).
/// 3. Case (lowercase first).
pub fn collate(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| accent_key(a).cmp(&accent_key(b)))
        .then_with(|| case_rank(a).cmp(case_rank(b)))
}

fn accent_key(text: &str) -> String {
    text.nfd().collect::<String>().to_lowercase()
}

fn case_rank(text: &str) -> impl Iterator<Item = (bool, char)> + '_ {
    text.chars().map(|c| (c.is_uppercase(), c))
}
