//! Expired-Entry Sweep Task
//!
//! Optional background task that periodically purges expired cache entries.
//! Expiration is lazy either way; the sweep only reclaims memory that would
//! otherwise sit in expired-but-unaccessed entries until the next insert
//! crosses the size threshold.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::CacheManager;

/// Spawns a background task that periodically purges expired entries from
/// one cache tier.
///
/// The task runs in an infinite loop, sleeping for the specified interval
/// between sweeps. It acquires a write lock on the cache to remove expired
/// entries.
///
/// # Arguments
/// * `cache` - Shared reference to the cache tier
/// * `interval_secs` - Interval in seconds between sweeps
/// * `tier` - Tier name used in log output
///
/// # Returns
/// A JoinHandle for the spawned task, used to abort it during graceful
/// shutdown.
pub fn spawn_cleanup_task<T>(
    cache: Arc<RwLock<CacheManager<T>>>,
    interval_secs: u64,
    tier: &'static str,
) -> JoinHandle<()>
where
    T: Clone + Send + Sync + 'static,
{
    let interval = Duration::from_secs(interval_secs);

    tokio::spawn(async move {
        info!(tier, interval_secs, "starting expired-entry sweep task");

        loop {
            tokio::time::sleep(interval).await;

            let removed = {
                let mut cache_guard = cache.write().await;
                cache_guard.purge_expired()
            };

            if removed > 0 {
                info!(tier, removed, "sweep removed expired entries");
            } else {
                debug!(tier, "sweep found no expired entries");
            }
        }
    })
}
