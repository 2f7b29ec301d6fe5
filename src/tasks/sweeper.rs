//! Stale-Object Sweeper Task
//!
//! Background task that periodically removes stale objects from the
//! in-memory backend. An object older than the freshness window can never
//! satisfy a fetch again, so keeping it only grows the map; this is map
//! hygiene, not an eviction policy.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::store::MemoryStore;

/// Spawns a background task that periodically purges stale objects.
///
/// The task runs in an infinite loop, sleeping for the specified interval
/// between sweeps.
///
/// # Arguments
/// * `store` - Shared in-memory store to sweep
/// * `sweep_interval_secs` - Interval in seconds between sweeps
/// * `window` - Freshness window; objects older than this are removed
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
pub fn spawn_sweeper_task(
    store: Arc<MemoryStore>,
    sweep_interval_secs: u64,
    window: Duration,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(sweep_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting stale-object sweeper with interval of {} seconds",
            sweep_interval_secs
        );

        loop {
            // Sleep for the configured interval
            tokio::time::sleep(interval).await;

            let removed = store.purge_stale(window);

            if removed > 0 {
                info!("Sweep removed {} stale objects", removed);
            } else {
                debug!("Sweep found no stale objects");
            }
        }
    })
}
