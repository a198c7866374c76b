//! Expiry Reaper Task
//!
//! Background task that periodically drains expired entries from the store's
//! expiry index.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use crate::cache::ExpiringStore;

/// Handle to a running reaper.
///
/// Dropping the handle also stops the task, since the stop channel closes.
#[derive(Debug)]
pub struct ReaperHandle {
    shutdown_tx: watch::Sender<bool>,
    handle: JoinHandle<()>,
}

impl ReaperHandle {
    /// Stops scheduling new reap cycles and waits for the task to exit.
    ///
    /// A cycle that is already running finishes first.
    pub async fn shutdown(self) {
        let _ = self.shutdown_tx.send(true);
        if let Err(err) = self.handle.await {
            debug!("Reaper task ended abnormally: {}", err);
        }
        info!("Reaper stopped");
    }

    /// Returns true once the task has exited.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

/// Spawns a background task that calls [`ExpiringStore::reap`] every `interval`.
///
/// The first cycle runs one full interval after spawning.
///
/// # Panics
/// Panics if called outside a Tokio runtime, or if `interval` is zero.
///
/// # Example
/// ```ignore
/// let store = Arc::new(ExpiringStore::new());
/// let reaper = spawn_reaper(store.clone(), Duration::from_secs(5));
/// // Later, during shutdown:
/// reaper.shutdown().await;
/// ```
pub fn spawn_reaper(store: Arc<ExpiringStore>, interval: Duration) -> ReaperHandle {
    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

    let handle = tokio::spawn(async move {
        info!("Starting reaper with interval of {:?}", interval);

        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately
        ticker.tick().await;

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let removed = store.reap();
                    if removed > 0 {
                        info!("Reaper: removed {} expired entries", removed);
                    } else {
                        debug!("Reaper: no expired entries found");
                    }
                }
                changed = shutdown_rx.changed() => {
                    // Err means the handle was dropped
                    if changed.is_err() || *shutdown_rx.borrow() {
                        break;
                    }
                }
            }
        }
    });

    ReaperHandle {
        shutdown_tx,
        handle,
    }
}
