//! Event-driven browsing session.
//!
//! A [`Session`] wraps a [`RecipeBrowser`] and routes [`UiEvent`]s to it.
//! Search input is debounced: the clear affordance appears on the first
//! keystroke, but the search is only committed once input has been quiet for
//! the configured period.

use std::time::Duration;

use recipe_favorites::Storage;
use tokio::sync::mpsc;

use crate::browser::RecipeBrowser;
use crate::debounce::Debouncer;
use crate::error::Result;
use crate::event::UiEvent;
use crate::pipeline::View;
use crate::presenter::Presenter;

/// A browser plus the search debouncer feeding it.
pub struct Session<'a, P, S> {
    browser: RecipeBrowser<'a, P, S>,
    debouncer: Debouncer<String>,
}

enum Step {
    Event(UiEvent),
    Settled(String),
    Closed,
}

impl<'a, P: Presenter, S: Storage> Session<'a, P, S> {
    /// Create a session; must be called within a tokio runtime.
    pub fn new(browser: RecipeBrowser<'a, P, S>, quiet: Duration) -> Self {
        Self {
            browser,
            debouncer: Debouncer::new(quiet),
        }
    }

    /// Apply one event.
    ///
    /// `TextChanged` only schedules a search; everything else takes effect
    /// before this returns.
    pub fn dispatch(&mut self, event: UiEvent) -> Result<()> {
        match event {
            UiEvent::TextChanged(raw) => {
                self.browser.search_input();
                self.debouncer.push(raw);
            }
            UiEvent::ClearRequested => {
                self.debouncer.cancel();
                self.browser.clear_search();
            }
            other => {
                self.browser.handle(other)?;
            }
        }
        Ok(())
    }

    /// Wait for the next debounced search value.
    ///
    /// A value whose search was cleared or superseded after its timer fired
    /// is never returned.
    pub async fn next_settled(&mut self) -> Option<String> {
        self.debouncer.settled().await
    }

    /// Commit a settled search value.
    pub fn commit_search(&mut self, raw: &str) -> View<'a> {
        self.browser.set_search(raw)
    }

    /// Returns `true` while a search refresh is scheduled.
    pub fn search_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Render the initial view, then process events until the sender closes.
    ///
    /// Event errors (unknown recipe, failed favorites write) are reported
    /// through [`Presenter::notify`] and do not end the session.
    pub async fn run(&mut self, mut events: mpsc::Receiver<UiEvent>) {
        self.browser.refresh();

        loop {
            let step = tokio::select! {
                event = events.recv() => match event {
                    Some(event) => Step::Event(event),
                    None => Step::Closed,
                },
                Some(text) = self.debouncer.settled() => Step::Settled(text),
            };

            match step {
                Step::Event(event) => {
                    if let Err(e) = self.dispatch(event) {
                        self.browser.presenter_mut().notify(&e.to_string());
                    }
                }
                Step::Settled(text) => {
                    self.commit_search(&text);
                }
                Step::Closed => break,
            }
        }

        if self.debouncer.cancel() {
            log::debug!("Session closed with a search still pending");
        }
    }

    /// The wrapped browser.
    pub fn browser(&self) -> &RecipeBrowser<'a, P, S> {
        &self.browser
    }
}
