//! Configuration Module
//!
//! Loads server configuration from environment variables.

use std::env;
use std::time::Duration;

/// Default reaper period in milliseconds
pub const DEFAULT_REAP_INTERVAL_MS: u64 = 5_000;

/// Default HTTP listen port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

/// Server configuration parameters.
#[derive(Debug, Clone)]
pub struct Config {
    /// Period of the background reaper in milliseconds
    pub reap_interval_ms: u64,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `REAP_INTERVAL_MS` - Reaper period in milliseconds (default: 5000, 0 falls back to default)
    /// - `SERVER_PORT` - HTTP server port (default: 8080)
    pub fn from_env() -> Self {
        Self {
            reap_interval_ms: env::var("REAP_INTERVAL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|ms: &u64| *ms > 0)
                .unwrap_or(DEFAULT_REAP_INTERVAL_MS),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SERVER_PORT),
        }
    }

    /// Returns the reaper period as a `Duration`.
    pub fn reap_interval(&self) -> Duration {
        Duration::from_millis(self.reap_interval_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reap_interval_ms: DEFAULT_REAP_INTERVAL_MS,
            server_port: DEFAULT_SERVER_PORT,
        }
    }
}
