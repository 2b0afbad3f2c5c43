//! Keystroke coalescing.
//!
//! Decouples the value the user is typing from the value driving a search:
//! [`QueryCoalescer::set_input`] runs on every keystroke, cheap and
//! synchronous; [`QueryCoalescer::poll`] runs on a timer tick and commits
//! the raw value once it has settled. A burst of keystrokes commits at most
//! once per settled value, and a newly committed value supersedes older
//! results wholesale; there is nothing in flight to cancel because each
//! search run is synchronous.

use std::time::{Duration, Instant};

pub struct QueryCoalescer {
    raw: String,
    committed: String,
    settle: Duration,
    /// Set while the raw value differs from the committed one; reset on
    /// every edit so the settle window restarts.
    pending_since: Option<Instant>,
}

impl QueryCoalescer {
    pub fn new(settle: Duration) -> Self {
        Self {
            raw: String::new(),
            committed: String::new(),
            settle,
            pending_since: None,
        }
    }

    /// Records the current input value.
    pub fn set_input(&mut self, text: &str, now: Instant) {
        if text == self.raw {
            return;
        }
        self.raw.clear();
        self.raw.push_str(text);

        // Typing back to the committed value cancels the pending commit.
        self.pending_since = if self.raw == self.committed {
            None
        } else {
            Some(now)
        };
    }

    /// The value currently in the input box.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The value currently driving search.
    pub fn committed(&self) -> &str {
        &self.committed
    }

    /// Commits the raw value once it has settled, returning the newly
    /// committed query. Returns `None` while input is still in flight or
    /// nothing changed.
    pub fn poll(&mut self, now: Instant) -> Option<&str> {
        let since = self.pending_since?;
        if now.duration_since(since) < self.settle {
            return None;
        }
        self.commit()
    }

    /// Commits immediately, skipping the settle wait (for example on Enter).
    pub fn flush(&mut self) -> Option<&str> {
        self.pending_since?;
        self.commit()
    }

    fn commit(&mut self) -> Option<&str> {
        self.pending_since = None;
        self.committed.clear();
        self.committed.push_str(&self.raw);
        Some(&self.committed)
    }
}
