//! # recipe-browser
//!
//! The display pipeline and session controller of the recipe browser.
//!
//! ```text
//! UiEvent ──► Session ──► RecipeBrowser ──► DisplayPipeline ──► Presenter
//!               │            │   (query state,    filter → sort     render +
//!               │            │    favorites)                        count
//!               └─ Debouncer (search text, one pending task)
//! ```
//!
//! - [`DisplayPipeline`] is the pure part: `(catalog, query, favorites) → View`.
//! - [`RecipeBrowser`] owns the session state and re-runs the pipeline after
//!   every mutation.
//! - [`Presenter`] is the seam to whatever draws the cards.
//! - [`Session`] feeds [`UiEvent`]s to the browser, debouncing search input.

#![forbid(unsafe_code)]

pub mod browser;
pub mod debounce;
pub mod error;
pub mod event;
pub mod pipeline;
pub mod presenter;
pub mod session;

pub use browser::RecipeBrowser;
pub use debounce::{DEFAULT_QUIET_PERIOD, Debouncer};
pub use error::{Error, Result};
pub use event::{Panel, UiEvent};
pub use pipeline::{Count, DisplayPipeline, View};
pub use presenter::Presenter;
pub use session::Session;
