//! Cache Statistics Module
//!
//! Tracks pool lookup hits and misses, commits and purges.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

// == Cache Stats ==
/// Point-in-time snapshot of pool metrics.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CacheStats {
    /// Number of lookups that returned a stored entry
    pub hits: u64,
    /// Number of lookups that returned a blank entry
    pub misses: u64,
    /// Number of commits performed
    pub commits: u64,
    /// Number of expired entries removed by purging
    pub purged: u64,
    /// Current number of entries in the live store
    pub total_entries: usize,
    /// Current number of entries awaiting commit
    pub pending_entries: usize,
}

impl CacheStats {
    // == Hit Rate ==
    /// Calculates the lookup hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

// == Stats Recorder ==
/// Lock-free counters updated by the pool.
#[derive(Debug, Default)]
pub(crate) struct StatsRecorder {
    hits: AtomicU64,
    misses: AtomicU64,
    commits: AtomicU64,
    purged: AtomicU64,
}

impl StatsRecorder {
    pub(crate) fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_commit(&self) {
        self.commits.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_purged(&self, count: usize) {
        self.purged.fetch_add(count as u64, Ordering::Relaxed);
    }

    /// Builds a snapshot with the given entry counts.
    pub(crate) fn snapshot(&self, total_entries: usize, pending_entries: usize) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            commits: self.commits.load(Ordering::Relaxed),
            purged: self.purged.load(Ordering::Relaxed),
            total_entries,
            pending_entries,
        }
    }
}
