//! Cache Entry Module
//!
//! Defines the stored unit: a value and the instant it stops being valid.

use std::time::{Duration, Instant};

use crate::cache::MAX_TTL;

// == Cache Entry ==
/// A single cache entry.
///
/// `expires_at` is fixed at construction. Overwriting a key replaces the whole
/// entry rather than mutating it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    /// The stored value
    pub value: String,
    /// Monotonic instant at which the entry expires
    pub expires_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry expiring `ttl` from now.
    ///
    /// TTLs above [`MAX_TTL`] are clamped so the deadline cannot overflow.
    pub fn new(value: String, ttl: Duration) -> Self {
        Self::with_deadline(value, Instant::now() + ttl.min(MAX_TTL))
    }

    /// Creates an entry with an explicit deadline.
    pub fn with_deadline(value: String, expires_at: Instant) -> Self {
        Self { value, expires_at }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// An entry is expired once the current time reaches `expires_at`, so a value
    /// is only returned while `now < expires_at`.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    /// Checks expiry against a caller-supplied instant.
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}
