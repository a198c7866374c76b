//! Expiry Index Module
//!
//! Min-ordered queue of `(expires_at, key)` slots used by the reaper to find
//! expired entries without scanning the whole map.
//!
//! The index is only a hint. Overwrites and deletes leave their old slots in
//! place, so callers must check every popped slot against the map before
//! acting on it.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::Instant;

// == Expiry Index ==
/// Min-heap over `(expires_at, key)`.
#[derive(Debug, Default)]
pub struct ExpiryIndex {
    queue: BinaryHeap<Reverse<(Instant, String)>>,
}

impl ExpiryIndex {
    // == Push ==
    /// Records that `key` expires at `expires_at`.
    pub fn push(&mut self, expires_at: Instant, key: String) {
        self.queue.push(Reverse((expires_at, key)));
    }

    // == Peek ==
    /// Returns the earliest deadline in the index, if any.
    pub fn peek_deadline(&self) -> Option<Instant> {
        self.queue.peek().map(|Reverse((at, _))| *at)
    }

    // == Pop Expired ==
    /// Pops the earliest slot if its deadline is at or before `now`.
    ///
    /// Returns `None` once the earliest slot is still in the future or the
    /// index is empty.
    pub fn pop_expired(&mut self, now: Instant) -> Option<(Instant, String)> {
        match self.peek_deadline() {
            Some(at) if at <= now => self.queue.pop().map(|Reverse(slot)| slot),
            _ => None,
        }
    }

    // == Rebuild ==
    /// Replaces every slot with the given live `(expires_at, key)` pairs,
    /// dropping all stale slots.
    pub fn rebuild<I>(&mut self, live: I)
    where
        I: IntoIterator<Item = (Instant, String)>,
    {
        self.queue = live.into_iter().map(Reverse).collect();
    }

    // == Length ==
    /// Number of slots, stale ones included.
    pub fn len(&self) -> usize {
        self.queue.len()
    }
}
