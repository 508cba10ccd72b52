//! Reaper Task
//!
//! Background task that periodically removes expired cache entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Spawns the background task that physically removes expired entries.
///
/// The task wakes once every TTL period — the sweep cadence equals the TTL
/// itself, so a stale entry can linger for just under two TTLs before
/// removal; the read path filters it out in the meantime. On each wake it
/// acquires the write lock and purges every entry older than the TTL.
///
/// The task runs until aborted; [`Cache`](crate::cache::Cache) retains the
/// returned handle and aborts it on drop.
///
/// # Arguments
/// * `store` - Shared reference to the cache store
/// * `ttl` - The store's TTL, used as the sweep period
pub fn spawn_reaper(store: Arc<RwLock<CacheStore>>, ttl: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        debug!("reaper started, sweep period {:?}", ttl);

        loop {
            // Sleep for one TTL period between sweeps
            tokio::time::sleep(ttl).await;

            // Acquire write lock and purge expired entries
            let removed = {
                let mut store_guard = store.write().await;
                store_guard.purge_expired()
            };

            if removed > 0 {
                info!("reaper removed {} expired entries", removed);
            } else {
                debug!("reaper found no expired entries");
            }
        }
    })
}
