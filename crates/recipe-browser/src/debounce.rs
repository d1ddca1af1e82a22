//! Search input debouncing.
//!
//! Raw input events can arrive on every keystroke. A [`Debouncer`] keeps at
//! most one pending delivery: each [`push`](Debouncer::push) aborts the
//! pending one and schedules a new delivery after the quiet period. Only the
//! last value of a burst is delivered; superseded values never are.
//!
//! Settled values are read with [`Debouncer::settled`]. The timer task only
//! sends; state changes happen wherever `settled` is awaited, so the session
//! keeps a single thread of control.
//!
//! Every delivery carries the generation it was scheduled under. A timer can
//! fire and queue its value before the reader gets to it; if
//! [`push`](Debouncer::push) or [`cancel`](Debouncer::cancel) runs in between,
//! the generation moves on and the queued value is discarded on read.
//!
//! ```rust
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! use std::time::Duration;
//! use recipe_browser::Debouncer;
//!
//! let mut debouncer = Debouncer::new(Duration::from_millis(10));
//! debouncer.push("c");
//! debouncer.push("cr");
//! debouncer.push("cre");
//! assert_eq!(debouncer.settled().await, Some("cre"));
//! # }
//! ```

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// Quiet period used by the search field.
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(300);

/// Cancel-and-reschedule delivery of the latest value.
///
/// Must be used from within a tokio runtime.
#[derive(Debug)]
pub struct Debouncer<T> {
    quiet: Duration,
    generation: u64,
    awaiting: bool,
    timer: Option<JoinHandle<()>>,
    tx: mpsc::UnboundedSender<(u64, T)>,
    rx: mpsc::UnboundedReceiver<(u64, T)>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Create a debouncer with the given quiet period.
    pub fn new(quiet: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            quiet,
            generation: 0,
            awaiting: false,
            timer: None,
            tx,
            rx,
        }
    }

    /// Supersede any pending delivery with `value`, delivered after the quiet
    /// period unless another push or a cancel arrives first.
    pub fn push(&mut self, value: T) {
        self.cancel();
        self.awaiting = true;

        let generation = self.generation;
        let tx = self.tx.clone();
        // Deadline is fixed at push time, not when the task is first polled.
        let deadline = Instant::now() + self.quiet;
        self.timer = Some(tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            let _ = tx.send((generation, value));
        }));
    }

    /// Drop the pending delivery, if any, including one whose timer already
    /// fired but has not been read. Returns `true` if one was pending.
    pub fn cancel(&mut self) -> bool {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
        self.generation = self.generation.wrapping_add(1);
        std::mem::replace(&mut self.awaiting, false)
    }

    /// Returns `true` while a delivery is scheduled or queued but not yet read.
    pub fn is_pending(&self) -> bool {
        self.awaiting
    }

    /// Wait for the next settled value.
    ///
    /// Values from superseded or cancelled generations are skipped. Stays
    /// pending while nothing is scheduled. Cancel safe.
    pub async fn settled(&mut self) -> Option<T> {
        loop {
            let (generation, value) = self.rx.recv().await?;
            if self.awaiting && generation == self.generation {
                self.awaiting = false;
                return Some(value);
            }
            log::debug!("Dropping superseded debounced value");
        }
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
