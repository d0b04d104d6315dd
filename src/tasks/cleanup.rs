//! TTL Cleanup Task
//!
//! Background task that periodically removes expired cache entries.
//!
//! Reads already ignore expired entries, so the sweep only reclaims memory
//! held by keys nobody asks for again.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::CacheRegistry;

/// Spawns a background task that periodically sweeps every named cache.
///
/// The task runs in an infinite loop, sleeping for the specified interval
/// between sweeps. Each instance's write lock is held only for its own sweep.
///
/// # Arguments
/// * `registry` - Handles to the named caches
/// * `cleanup_interval_secs` - Interval in seconds between cleanup runs
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
///
/// # Example
/// ```ignore
/// let cleanup_handle = spawn_cleanup_task(registry.clone(), 60);
/// // Later, during shutdown:
/// cleanup_handle.abort();
/// ```
pub fn spawn_cleanup_task(registry: CacheRegistry, cleanup_interval_secs: u64) -> JoinHandle<()> {
    let interval = Duration::from_secs(cleanup_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting TTL cleanup task with interval of {} seconds",
            cleanup_interval_secs
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = registry.cleanup_all().await;

            if removed > 0 {
                info!("TTL cleanup: removed {} expired entries", removed);
            } else {
                debug!("TTL cleanup: no expired entries found");
            }
        }
    })
}
