use std::time::{Duration, Instant};

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Holds the latest search edit until it has been quiet for `delay`.
///
/// Time is passed in by the caller, so the debouncer has no timer of its own
/// and is driven by whatever loop polls it.
#[derive(Debug, Clone)]
pub struct SearchDebouncer {
    delay: Duration,
    pending: Option<PendingSearch>,
}

#[derive(Debug, Clone)]
struct PendingSearch {
    text: String,
    deadline: Instant,
}

impl Default for SearchDebouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

impl SearchDebouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Record an edit; restarts the quiet period.
    pub fn push(&mut self, text: String, now: Instant) {
        self.pending = Some(PendingSearch {
            text,
            deadline: now + self.delay,
        });
    }

    /// Pending text, if its quiet period has elapsed.
    pub fn take_due(&mut self, now: Instant) -> Option<String> {
        let due = self.pending.as_ref().is_some_and(|p| p.deadline <= now);
        if due { self.flush() } else { None }
    }

    /// Pending text regardless of the deadline.
    pub fn flush(&mut self) -> Option<String> {
        self.pending.take().map(|p| p.text)
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
