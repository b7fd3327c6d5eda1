//! Operation Metrics Module
//!
//! Counters describing how a deque is being used: how often inserts evict,
//! how often pops hit an empty deque, how often lookups miss, and the peak
//! length reached. Collection uses relaxed atomics outside the deque's lock,
//! so a snapshot taken under concurrent use is only approximately consistent.

use core::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

/// Snapshot of a deque's operation counters
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DequeMetrics {
    /// Elements inserted at either end
    pub appends: u64,
    /// Elements evicted to keep a bounded deque within capacity
    pub evictions: u64,
    /// Successful pops from either end
    pub pops: u64,
    /// Pops attempted on an empty deque
    pub empty_pops: u64,
    /// Successful indexed lookups
    pub peeks: u64,
    /// Lookups with an out-of-bounds index
    pub failed_peeks: u64,
    /// Calls to `rotate` that moved at least one element
    pub rotations: u64,
    /// Largest length observed after an insertion
    pub peak_len: usize,
}

impl DequeMetrics {
    /// Percentage of inserts that evicted an element
    pub fn eviction_rate(&self) -> f64 {
        if self.appends == 0 {
            0.0
        } else {
            (self.evictions as f64 / self.appends as f64) * 100.0
        }
    }

    /// Percentage of pops that found the deque empty
    pub fn empty_pop_rate(&self) -> f64 {
        let total = self.pops + self.empty_pops;
        if total == 0 {
            0.0
        } else {
            (self.empty_pops as f64 / total as f64) * 100.0
        }
    }

    /// Percentage of lookups that were out of bounds
    pub fn peek_failure_rate(&self) -> f64 {
        let total = self.peeks + self.failed_peeks;
        if total == 0 {
            0.0
        } else {
            (self.failed_peeks as f64 / total as f64) * 100.0
        }
    }
}

/// Internal atomic metrics collection
#[derive(Debug, Default)]
pub(crate) struct AtomicMetrics {
    appends: AtomicU64,
    evictions: AtomicU64,
    pops: AtomicU64,
    empty_pops: AtomicU64,
    peeks: AtomicU64,
    failed_peeks: AtomicU64,
    rotations: AtomicU64,
    peak_len: AtomicUsize,
}

impl AtomicMetrics {
    /// Record one insertion, whether it evicted, and the length it left behind
    pub(crate) fn record_append(&self, evicted: bool, len: usize) {
        self.appends.fetch_add(1, Ordering::Relaxed);
        if evicted {
            self.evictions.fetch_add(1, Ordering::Relaxed);
        }
        self.update_peak_len(len);
    }

    pub(crate) fn record_pop(&self, success: bool) {
        if success {
            self.pops.fetch_add(1, Ordering::Relaxed);
        } else {
            self.empty_pops.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub(crate) fn record_peek(&self, success: bool) {
        if success {
            self.peeks.fetch_add(1, Ordering::Relaxed);
        } else {
            self.failed_peeks.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub(crate) fn record_rotation(&self) {
        self.rotations.fetch_add(1, Ordering::Relaxed);
    }

    /// Raise the peak length if `len` is higher
    pub(crate) fn update_peak_len(&self, len: usize) {
        let mut current_peak = self.peak_len.load(Ordering::Relaxed);
        while len > current_peak {
            match self.peak_len.compare_exchange_weak(
                current_peak,
                len,
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(_) => break,
                Err(x) => current_peak = x,
            }
        }
    }

    /// Get current metrics snapshot
    pub(crate) fn snapshot(&self) -> DequeMetrics {
        DequeMetrics {
            appends: self.appends.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
            pops: self.pops.load(Ordering::Relaxed),
            empty_pops: self.empty_pops.load(Ordering::Relaxed),
            peeks: self.peeks.load(Ordering::Relaxed),
            failed_peeks: self.failed_peeks.load(Ordering::Relaxed),
            rotations: self.rotations.load(Ordering::Relaxed),
            peak_len: self.peak_len.load(Ordering::Relaxed),
        }
    }

    /// Reset all counters
    ///
    /// The peak restarts from `current_len` since it reflects live state.
    pub(crate) fn reset(&self, current_len: usize) {
        self.appends.store(0, Ordering::Relaxed);
        self.evictions.store(0, Ordering::Relaxed);
        self.pops.store(0, Ordering::Relaxed);
        self.empty_pops.store(0, Ordering::Relaxed);
        self.peeks.store(0, Ordering::Relaxed);
        self.failed_peeks.store(0, Ordering::Relaxed);
        self.rotations.store(0, Ordering::Relaxed);
        self.peak_len.store(current_len, Ordering::Relaxed);
    }
}

/// Trait for data structures that support operation metrics
pub trait MetricsCollector {
    /// Get current metrics
    fn metrics(&self) -> DequeMetrics;

    /// Reset all metrics
    fn reset_metrics(&self);

    /// Enable or disable metrics collection
    fn set_metrics_enabled(&self, enabled: bool);

    /// Check if metrics collection is enabled
    fn is_metrics_enabled(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rates_on_empty_metrics() {
        let metrics = DequeMetrics::default();
        assert_eq!(metrics.eviction_rate(), 0.0);
        assert_eq!(metrics.empty_pop_rate(), 0.0);
        assert_eq!(metrics.peek_failure_rate(), 0.0);
    }

    #[test]
    fn test_record_and_snapshot() {
        let metrics = AtomicMetrics::default();
        metrics.record_append(false, 1);
        metrics.record_append(false, 2);
        metrics.record_append(true, 2);
        metrics.record_append(true, 2);
        metrics.record_pop(true);
        metrics.record_pop(false);
        metrics.record_peek(true);
        metrics.record_peek(true);
        metrics.record_peek(true);
        metrics.record_peek(false);
        metrics.record_rotation();

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.appends, 4);
        assert_eq!(snapshot.evictions, 2);
        assert_eq!(snapshot.pops, 1);
        assert_eq!(snapshot.empty_pops, 1);
        assert_eq!(snapshot.peeks, 3);
        assert_eq!(snapshot.failed_peeks, 1);
        assert_eq!(snapshot.rotations, 1);
        assert_eq!(snapshot.peak_len, 2);
        assert_eq!(snapshot.eviction_rate(), 50.0);
        assert_eq!(snapshot.empty_pop_rate(), 50.0);
        assert_eq!(snapshot.peek_failure_rate(), 25.0);
    }

    #[test]
    fn test_peak_only_grows() {
        let metrics = AtomicMetrics::default();
        metrics.update_peak_len(5);
        metrics.update_peak_len(3);
        assert_eq!(metrics.snapshot().peak_len, 5);
    }

    #[test]
    fn test_reset() {
        let metrics = AtomicMetrics::default();
        metrics.record_append(true, 9);
        metrics.record_pop(false);
        metrics.reset(4);

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.appends, 0);
        assert_eq!(snapshot.evictions, 0);
        assert_eq!(snapshot.empty_pops, 0);
        assert_eq!(snapshot.peak_len, 4);
    }
}
