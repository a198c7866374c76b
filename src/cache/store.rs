//! Cache Store Module
//!
//! The expiring store: a map of keys to entries plus a min-ordered expiry
//! index, both behind one reader/writer lock.
//!
//! Expired entries leave the map three ways:
//! - lazily, when `get` finds one past its deadline
//! - proactively, when `reap` pops its slot from the expiry index
//! - explicitly, through `delete`

use std::collections::HashMap;
use std::time::{Duration, Instant};

use parking_lot::RwLock;
use tracing::debug;

use crate::cache::{CacheEntry, CacheStats, ExpiryIndex, StatsSnapshot};
use crate::error::{CacheError, Result};

/// Minimum number of stale slots tolerated before `put` rebuilds the index
const INDEX_COMPACT_SLACK: usize = 64;

// == Store State ==
/// Everything guarded by the store lock.
#[derive(Debug, Default)]
struct StoreState {
    /// Authoritative key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Expiry hints for the reaper
    expiry: ExpiryIndex,
}

impl StoreState {
    /// Drops stale index slots once they outnumber live entries.
    fn compact_index_if_bloated(&mut self) {
        if self.expiry.len() <= 2 * self.entries.len() + INDEX_COMPACT_SLACK {
            return;
        }
        let before = self.expiry.len();
        self.expiry.rebuild(
            self.entries
                .iter()
                .map(|(key, entry)| (entry.expires_at, key.clone())),
        );
        debug!(
            "Compacted expiry index from {} to {} slots",
            before,
            self.expiry.len()
        );
    }
}

// == Expiring Store ==
/// Thread-safe key-value store with per-entry TTL.
///
/// The store owns no background task. Share it behind an `Arc` and pass it to
/// [`spawn_reaper`](crate::tasks::spawn_reaper) to get proactive eviction.
#[derive(Debug, Default)]
pub struct ExpiringStore {
    state: RwLock<StoreState>,
    stats: CacheStats,
}

impl ExpiringStore {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // == Put ==
    /// Stores `value` under `key`, expiring `ttl` from now.
    ///
    /// An existing entry for `key` is replaced outright, deadline included.
    ///
    /// # Errors
    /// Returns [`CacheError::InvalidArgument`] if `key` is empty or `ttl` is
    /// zero. The store is left unchanged in that case.
    pub fn put(
        &self,
        key: impl Into<String>,
        value: impl Into<String>,
        ttl: Duration,
    ) -> Result<()> {
        let key = key.into();
        if key.is_empty() {
            debug!("Rejected put: empty key");
            return Err(CacheError::InvalidArgument("Key cannot be empty".to_string()));
        }
        if ttl.is_zero() {
            debug!("Rejected put for '{}': ttl must be positive", key);
            return Err(CacheError::InvalidArgument(
                "TTL must be greater than zero".to_string(),
            ));
        }

        let entry = CacheEntry::new(value.into(), ttl);

        let mut state = self.state.write();
        state.expiry.push(entry.expires_at, key.clone());
        state.entries.insert(key, entry);
        state.compact_index_if_bloated();

        Ok(())
    }

    // == Get ==
    /// Returns the value for `key` if it is present and not yet expired.
    ///
    /// An entry found past its deadline is removed before returning `None`.
    /// The expiry index is never touched here.
    pub fn get(&self, key: &str) -> Option<String> {
        let now = Instant::now();

        let expired_at = {
            let state = self.state.read();
            match state.entries.get(key) {
                None => {
                    self.stats.record_miss();
                    return None;
                }
                Some(entry) if !entry.is_expired_at(now) => {
                    self.stats.record_hit();
                    return Some(entry.value.clone());
                }
                Some(entry) => entry.expires_at,
            }
        };

        self.evict_if_expired(key, expired_at);
        self.stats.record_miss();
        None
    }

    /// Removes `key` under the write lock if its entry still carries the
    /// deadline a reader saw expire. A put that replaced the entry after the
    /// read guard was released is left alone.
    fn evict_if_expired(&self, key: &str, expired_at: Instant) {
        let mut state = self.state.write();
        if state
            .entries
            .get(key)
            .is_some_and(|entry| entry.expires_at == expired_at)
        {
            state.entries.remove(key);
            self.stats.record_expired_on_read();
        }
    }

    // == Delete ==
    /// Removes `key` if present. Returns whether an entry was removed.
    ///
    /// Deleting a missing key is a no-op. The key's expiry slot is left for the
    /// reaper to discard.
    pub fn delete(&self, key: &str) -> bool {
        self.state.write().entries.remove(key).is_some()
    }

    // == Reap ==
    /// Removes every entry whose deadline has passed, earliest first.
    ///
    /// Stops at the first slot that is not yet due, so the cost is bounded by
    /// the number of expired slots. A slot whose key was since deleted or
    /// re-put with a different deadline is discarded without touching the map.
    ///
    /// Returns the number of entries removed from the map.
    pub fn reap(&self) -> usize {
        self.reap_at(Instant::now())
    }

    fn reap_at(&self, now: Instant) -> usize {
        let mut removed = 0usize;
        let mut stale = 0usize;

        let mut guard = self.state.write();
        let state = &mut *guard;
        while let Some((expires_at, key)) = state.expiry.pop_expired(now) {
            let current = state
                .entries
                .get(&key)
                .is_some_and(|entry| entry.expires_at == expires_at);
            if current {
                state.entries.remove(&key);
                removed += 1;
            } else {
                stale += 1;
            }
        }
        drop(guard);

        self.stats.record_reaped(removed as u64);
        self.stats.record_stale_skipped(stale as u64);
        removed
    }

    // == Stats ==
    /// Returns a snapshot of the store's counters.
    pub fn stats(&self) -> StatsSnapshot {
        let state = self.state.read();
        self.stats.snapshot(state.entries.len(), state.expiry.len())
    }

    // == Length ==
    /// Number of keys in the map, including expired ones not yet evicted.
    pub fn len(&self) -> usize {
        self.state.read().entries.len()
    }

    // == Is Empty ==
    /// Returns true if the map holds no keys.
    pub fn is_empty(&self) -> bool {
        self.state.read().entries.is_empty()
    }
}
