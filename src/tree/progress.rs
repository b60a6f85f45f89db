//! Progress accounting for a traversal
//!
//! `total` comes from the counting pass; `processed` grows by the same
//! per-directory item count during the processing pass. Both are atomics so a
//! front-end can poll the percentage from another thread mid-run.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
struct Counters {
    total: AtomicU64,
    processed: AtomicU64,
}

/// Shared progress counters. Clones observe the same counters.
#[derive(Debug, Clone, Default)]
pub struct Progress {
    counters: Arc<Counters>,
}

impl Progress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero both counters at the start of a run.
    pub fn reset(&self) {
        self.counters.processed.store(0, Ordering::Relaxed);
        self.counters.total.store(0, Ordering::Relaxed);
    }

    pub fn set_total(&self, total: u64) {
        self.counters.total.store(total, Ordering::Relaxed);
    }

    /// Add `items` to `processed`, never passing `total`.
    pub fn advance(&self, items: u64) {
        let total = self.total();
        let _ = self
            .counters
            .processed
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |processed| {
                Some(processed.saturating_add(items).min(total))
            });
    }

    /// Mark the run complete: `processed = total`.
    pub fn finish(&self) {
        self.counters
            .processed
            .store(self.total(), Ordering::Relaxed);
    }

    pub fn total(&self) -> u64 {
        self.counters.total.load(Ordering::Relaxed)
    }

    pub fn processed(&self) -> u64 {
        self.counters.processed.load(Ordering::Relaxed)
    }

    /// Completion percentage in `[0, 100]`; 0 when there is nothing to count.
    pub fn percent(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.processed() as f64 / total as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_progress_is_zero() {
        let progress = Progress::new();
        assert_eq!(progress.percent(), 0.0);
        progress.finish();
        assert_eq!(progress.percent(), 0.0);
    }

    #[test]
    fn test_advance_and_finish() {
        let progress = Progress::new();
        progress.set_total(8);
        progress.advance(2);
        assert_eq!(progress.processed(), 2);
        assert_eq!(progress.percent(), 25.0);

        progress.advance(4);
        assert_eq!(progress.percent(), 75.0);

        progress.finish();
        assert_eq!(progress.processed(), 8);
        assert_eq!(progress.percent(), 100.0);
    }

    #[test]
    fn test_advance_never_exceeds_total() {
        let progress = Progress::new();
        progress.set_total(3);
        progress.advance(10);
        assert_eq!(progress.processed(), 3);
        assert_eq!(progress.percent(), 100.0);
    }

    #[test]
    fn test_reset_clears_counters() {
        let progress = Progress::new();
        let observer = progress.clone();
        progress.set_total(5);
        progress.finish();
        assert_eq!(observer.percent(), 100.0);

        progress.reset();
        assert_eq!(observer.total(), 0);
        assert_eq!(observer.processed(), 0);
        assert_eq!(observer.percent(), 0.0);
    }
}
