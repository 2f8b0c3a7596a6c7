//! Loading indicator ownership.
//!
//! The router never calls `show`/`hide` directly. Every navigation attempt
//! takes a [`LoadingGuard`] from the [`LoadingTracker`]; dropping the guard is
//! the only way the attempt releases the indicator, so every exit path
//! (success, not-found, double failure, superseded) hides it.

use std::cell::Cell;

/// The overlay shown while a page loads.
pub trait LoadingIndicator {
    fn show(&self);
    fn hide(&self);
}

/// Counts in-flight attempts; the indicator is visible while any is running.
pub struct LoadingTracker<L> {
    indicator: L,
    in_flight: Cell<usize>,
}

impl<L: LoadingIndicator> LoadingTracker<L> {
    pub fn new(indicator: L) -> Self {
        Self {
            indicator,
            in_flight: Cell::new(0),
        }
    }

    pub fn begin(&self) -> LoadingGuard<'_, L> {
        let count = self.in_flight.get();
        if count == 0 {
            self.indicator.show();
        }
        self.in_flight.set(count + 1);
        LoadingGuard { tracker: self }
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.get()
    }

    pub fn indicator(&self) -> &L {
        &self.indicator
    }

    fn end(&self) {
        let count = self.in_flight.get().saturating_sub(1);
        self.in_flight.set(count);
        if count == 0 {
            self.indicator.hide();
        }
    }
}

pub struct LoadingGuard<'a, L: LoadingIndicator> {
    tracker: &'a LoadingTracker<L>,
}

impl<L: LoadingIndicator> Drop for LoadingGuard<'_, L> {
    fn drop(&mut self) {
        self.tracker.end();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Counter {
        shows: Cell<u32>,
        hides: Cell<u32>,
    }

    impl LoadingIndicator for Counter {
        fn show(&self) {
            self.shows.set(self.shows.get() + 1);
        }
        fn hide(&self) {
            self.hides.set(self.hides.get() + 1);
        }
    }

    #[test]
    fn test_single_attempt_is_balanced() {
        let tracker = LoadingTracker::new(Counter::default());
        {
            let _guard = tracker.begin();
            assert_eq!(tracker.indicator().shows.get(), 1);
            assert_eq!(tracker.indicator().hides.get(), 0);
        }
        assert_eq!(tracker.indicator().hides.get(), 1);
        assert_eq!(tracker.in_flight(), 0);
    }

    #[test]
    fn test_overlapping_attempts_keep_indicator_visible() {
        let tracker = LoadingTracker::new(Counter::default());
        let first = tracker.begin();
        let second = tracker.begin();
        drop(first);
        assert_eq!(tracker.indicator().hides.get(), 0, "second attempt still running");
        drop(second);
        assert_eq!(tracker.indicator().shows.get(), 1);
        assert_eq!(tracker.indicator().hides.get(), 1);
    }
}
