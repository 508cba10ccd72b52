//! Cache Statistics Module
//!
//! Tracks cache performance metrics including hits, misses, and reaped entries.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

// == Cache Stats ==
/// Tracks cache performance metrics.
///
/// Counters are atomic so the read path can record hits and misses while
/// holding only the shared read lock.
#[derive(Debug, Default)]
pub struct CacheStats {
    /// Number of successful cache retrievals
    hits: AtomicU64,
    /// Number of failed cache retrievals (key not found or expired)
    misses: AtomicU64,
    /// Number of entries physically removed by the reaper
    reaped: AtomicU64,
}

/// Point-in-time copy of the cache counters.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StatsSnapshot {
    /// Number of successful cache retrievals
    pub hits: u64,
    /// Number of failed cache retrievals
    pub misses: u64,
    /// Number of entries physically removed by the reaper
    pub reaped: u64,
    /// Current number of entries in the cache
    pub total_entries: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Record Hit ==
    /// Increments the hit counter.
    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    // == Record Miss ==
    /// Increments the miss counter.
    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    // == Record Reaped ==
    /// Adds to the reaped-entry counter.
    pub fn record_reaped(&self, count: u64) {
        self.reaped.fetch_add(count, Ordering::Relaxed);
    }

    // == Snapshot ==
    /// Copies the counters into a plain snapshot.
    pub fn snapshot(&self, total_entries: usize) -> StatsSnapshot {
        StatsSnapshot {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            reaped: self.reaped.load(Ordering::Relaxed),
            total_entries,
        }
    }
}

impl StatsSnapshot {
    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no requests have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}
