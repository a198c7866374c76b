//! Cache Module
//!
//! Provides the in-memory expiring store with lazy and proactive eviction.

use std::time::Duration;

mod entry;
mod expiry;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub(crate) use expiry::ExpiryIndex;
pub use stats::{CacheStats, StatsSnapshot};
pub use store::ExpiringStore;

// == Public Constants ==
/// Upper bound applied to TTLs (about 100 years)
pub const MAX_TTL: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);
