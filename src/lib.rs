//! Expiring Cache - an in-memory key/value cache with per-entry TTL
//!
//! Expired entries are dropped lazily on read and proactively by a background
//! reaper that walks a min-ordered expiry index.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use cache::ExpiringStore;
pub use config::Config;
pub use error::{CacheError, Result};
pub use tasks::{spawn_reaper, ReaperHandle};
