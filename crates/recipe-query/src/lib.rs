//! Query state, filtering and sorting for the recipe browser.
//!
//! The display pipeline is `sort(filter(catalog, query, favorites), query.sort)`.
//! Both stages are pure functions over borrowed recipes; neither mutates the
//! catalog nor its input list.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                    recipe-query                      │
//! ├──────────────────────────────────────────────────────┤
//! │  QueryState { filter, sort, search }                 │
//! ├──────────────────────────────────────────────────────┤
//! │  filter()  search narrows first, category second     │
//! │  sort()    stable, locale-aware title ordering       │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use recipe_core::{Catalog, RecipeId};
//! use recipe_query::{filter, sort, CategoryFilter, QueryState, SortOrder};
//!
//! let catalog = Catalog::builtin();
//! let query = QueryState {
//!     filter: CategoryFilter::Veg,
//!     sort: SortOrder::ZToA,
//!     ..Default::default()
//! };
//! let favorites: Vec<RecipeId> = Vec::new();
//!
//! let visible = sort(&filter(&catalog, &query, &favorites), query.sort);
//! let titles: Vec<_> = visible.iter().map(|r| r.title.as_str()).collect();
//! assert_eq!(titles, ["Veg Pasta", "Paneer Butter Masala"]);
//! ```

#![forbid(unsafe_code)]

pub mod filter;
pub mod query;
pub mod sort;

pub use filter::{filter, matches_category, matches_search};
pub use query::{CategoryFilter, QueryState, SortOrder};
pub use sort::sort;
