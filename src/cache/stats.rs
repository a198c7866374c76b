//! Cache Statistics Module
//!
//! Tracks lookups and evictions. Counters are atomic because `get` runs under
//! the shared read lock.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

// == Cache Stats ==
/// Live counters owned by the store.
#[derive(Debug, Default)]
pub struct CacheStats {
    hits: AtomicU64,
    misses: AtomicU64,
    expired_on_read: AtomicU64,
    reaped: AtomicU64,
    stale_skipped: AtomicU64,
}

impl CacheStats {
    /// Increments the hit counter.
    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Increments the miss counter.
    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    /// Counts an entry dropped by a read that found it expired.
    pub fn record_expired_on_read(&self) {
        self.expired_on_read.fetch_add(1, Ordering::Relaxed);
    }

    /// Counts entries dropped by the reaper.
    pub fn record_reaped(&self, count: u64) {
        self.reaped.fetch_add(count, Ordering::Relaxed);
    }

    /// Counts index slots discarded because their key was overwritten or deleted.
    pub fn record_stale_skipped(&self, count: u64) {
        self.stale_skipped.fetch_add(count, Ordering::Relaxed);
    }

    // == Snapshot ==
    /// Copies the counters together with the current sizes.
    pub fn snapshot(&self, total_entries: usize, index_len: usize) -> StatsSnapshot {
        StatsSnapshot {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            expired_on_read: self.expired_on_read.load(Ordering::Relaxed),
            reaped: self.reaped.load(Ordering::Relaxed),
            stale_skipped: self.stale_skipped.load(Ordering::Relaxed),
            total_entries,
            index_len,
        }
    }
}

// == Stats Snapshot ==
/// Point-in-time copy of the store's counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatsSnapshot {
    /// Lookups that returned a value
    pub hits: u64,
    /// Lookups that returned nothing (missing or expired)
    pub misses: u64,
    /// Entries removed lazily by `get`
    pub expired_on_read: u64,
    /// Entries removed by the reaper
    pub reaped: u64,
    /// Stale expiry slots discarded by the reaper
    pub stale_skipped: u64,
    /// Keys currently in the map
    pub total_entries: usize,
    /// Slots currently in the expiry index
    pub index_len: usize,
}

impl StatsSnapshot {
    // == Hit Rate ==
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
