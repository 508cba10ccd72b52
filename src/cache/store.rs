//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with time-based expiration,
//! plus the shared handle that owns the background reaper.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use crate::cache::{CacheEntry, CacheStats, StatsSnapshot};
use crate::tasks::spawn_reaper;

// == Cache Store ==
/// Synchronous cache engine: key/value storage with a fixed TTL.
///
/// The store itself does no locking; [`Cache`] wraps it in an
/// `Arc<RwLock<_>>` for shared use. Entries are only physically removed by
/// [`purge_expired`](CacheStore::purge_expired) — the read path filters
/// stale entries but never deletes them.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-payload storage
    entries: HashMap<String, CacheEntry>,
    /// Fixed time-to-live for every entry
    ttl: Duration,
    /// Performance counters
    stats: CacheStats,
}

impl CacheStore {
    // == Constructor ==
    /// Creates a new CacheStore with the given TTL.
    ///
    /// # Panics
    /// Panics if `ttl` is zero; the cache requires a positive duration.
    pub fn new(ttl: Duration) -> Self {
        assert!(!ttl.is_zero(), "cache TTL must be positive");
        Self {
            entries: HashMap::new(),
            ttl,
            stats: CacheStats::new(),
        }
    }

    // == Add ==
    /// Stores a payload under a key, stamping it with the current time.
    ///
    /// If the key already exists the entry is overwritten and its age
    /// resets. Any key (including empty) and any payload (including empty)
    /// are accepted; insertion cannot fail.
    pub fn add(&mut self, key: String, payload: Vec<u8>) {
        self.entries.insert(key, CacheEntry::new(payload));
    }

    // == Get ==
    /// Retrieves the payload for a key, if present and still fresh.
    ///
    /// A stale entry is treated exactly like a missing one, whether or not
    /// the reaper has physically removed it yet. The lookup never mutates
    /// the map: removal is solely the reaper's job.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        match self.entries.get(key) {
            Some(entry) if !entry.is_expired(self.ttl) => {
                self.stats.record_hit();
                Some(entry.payload.clone())
            }
            _ => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Purge Expired ==
    /// Physically removes all entries whose age exceeds the TTL.
    ///
    /// Returns the number of entries removed.
    pub fn purge_expired(&mut self) -> usize {
        let before = self.entries.len();
        let ttl = self.ttl;
        self.entries.retain(|_, entry| !entry.is_expired(ttl));
        let removed = before - self.entries.len();
        self.stats.record_reaped(removed as u64);
        removed
    }

    // == TTL ==
    /// Returns the store's fixed TTL.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Stats ==
    /// Returns a snapshot of the current cache counters.
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot(self.entries.len())
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// == Cache Handle ==
/// Shared expiring cache.
///
/// Constructing a `Cache` starts exactly one background reaper task bound
/// to this instance; dropping the `Cache` aborts it, so short-lived
/// processes and tests tear down deterministically. Callers share the
/// handle via `Arc<Cache>`.
#[derive(Debug)]
pub struct Cache {
    /// Thread-safe store shared with the reaper
    store: Arc<RwLock<CacheStore>>,
    /// Handle of the background reaper task
    reaper: JoinHandle<()>,
}

impl Cache {
    // == Constructor ==
    /// Creates a new cache and starts its reaper.
    ///
    /// Construction never blocks and performs no I/O. Must be called from
    /// within a tokio runtime.
    ///
    /// # Panics
    /// Panics if `ttl` is zero; the cache requires a positive duration.
    pub fn new(ttl: Duration) -> Self {
        let store = Arc::new(RwLock::new(CacheStore::new(ttl)));
        let reaper = spawn_reaper(Arc::clone(&store), ttl);
        Self { store, reaper }
    }

    // == Add ==
    /// Inserts or overwrites the entry for `key`.
    ///
    /// Visible to any reader that subsequently acquires read access.
    pub async fn add(&self, key: impl Into<String>, payload: Vec<u8>) {
        let mut store = self.store.write().await;
        store.add(key.into(), payload);
    }

    // == Get ==
    /// Returns the payload stored under `key`, if present and fresh.
    ///
    /// Any number of concurrent `get` calls proceed together; only writers
    /// take exclusive access.
    pub async fn get(&self, key: &str) -> Option<Vec<u8>> {
        let store = self.store.read().await;
        store.get(key)
    }

    // == Length ==
    /// Returns the number of physically present entries, stale ones included.
    pub async fn len(&self) -> usize {
        let store = self.store.read().await;
        store.len()
    }

    // == Stats ==
    /// Returns a snapshot of the cache counters.
    pub async fn stats(&self) -> StatsSnapshot {
        let store = self.store.read().await;
        store.stats()
    }
}

impl Drop for Cache {
    fn drop(&mut self) {
        // The reaper holds its own Arc to the store; without this it would
        // run for the rest of the process.
        self.reaper.abort();
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    const TEST_TTL: Duration = Duration::from_secs(300);

    #[test]
    fn test_store_new() {
        let store = CacheStore::new(TEST_TTL);
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
        assert_eq!(store.ttl(), TEST_TTL);
    }

    #[test]
    #[should_panic(expected = "TTL must be positive")]
    fn test_store_zero_ttl_panics() {
        let _ = CacheStore::new(Duration::ZERO);
    }

    #[test]
    fn test_store_add_and_get() {
        let mut store = CacheStore::new(TEST_TTL);

        store.add("key1".to_string(), b"value1".to_vec());

        assert_eq!(store.get("key1"), Some(b"value1".to_vec()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_get_nonexistent() {
        let store = CacheStore::new(TEST_TTL);

        assert_eq!(store.get("nonexistent"), None);
    }

    #[test]
    fn test_store_empty_key_and_payload() {
        let mut store = CacheStore::new(TEST_TTL);

        store.add(String::new(), Vec::new());

        assert_eq!(store.get(""), Some(Vec::new()));
    }

    #[test]
    fn test_store_overwrite_wins() {
        let mut store = CacheStore::new(TEST_TTL);

        store.add("key1".to_string(), b"value1".to_vec());
        store.add("key1".to_string(), b"value2".to_vec());

        assert_eq!(store.get("key1"), Some(b"value2".to_vec()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_lazy_expiry_does_not_remove() {
        let mut store = CacheStore::new(Duration::from_millis(50));

        store.add("key1".to_string(), b"value1".to_vec());
        sleep(Duration::from_millis(80));

        // Stale entry reads as absent but is still physically present
        assert_eq!(store.get("key1"), None);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_overwrite_resets_age() {
        let mut store = CacheStore::new(Duration::from_millis(100));

        store.add("key1".to_string(), b"old".to_vec());
        sleep(Duration::from_millis(70));

        // Re-adding restarts the clock from the second insertion
        store.add("key1".to_string(), b"new".to_vec());
        sleep(Duration::from_millis(70));

        assert_eq!(store.get("key1"), None);

        store.add("key1".to_string(), b"newer".to_vec());
        assert_eq!(store.get("key1"), Some(b"newer".to_vec()));
    }

    #[test]
    fn test_store_purge_expired() {
        let mut store = CacheStore::new(Duration::from_millis(50));

        store.add("old".to_string(), b"a".to_vec());
        sleep(Duration::from_millis(80));
        store.add("fresh".to_string(), b"b".to_vec());

        let removed = store.purge_expired();

        assert_eq!(removed, 1);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("fresh"), Some(b"b".to_vec()));
    }

    #[test]
    fn test_store_stats_counters() {
        let mut store = CacheStore::new(TEST_TTL);

        store.add("key1".to_string(), b"value1".to_vec());
        let _ = store.get("key1"); // hit
        let _ = store.get("nonexistent"); // miss

        let stats = store.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.total_entries, 1);
    }

    #[tokio::test]
    async fn test_cache_add_and_get() {
        let cache = Cache::new(TEST_TTL);

        cache.add("key1", b"value1".to_vec()).await;

        assert_eq!(cache.get("key1").await, Some(b"value1".to_vec()));
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_cache_miss_on_unknown_key() {
        let cache = Cache::new(TEST_TTL);

        assert_eq!(cache.get("unknown").await, None);
    }

    #[tokio::test]
    async fn test_cache_expiry_before_sweep() {
        // TTL short enough to expire, but the first sweep only happens a
        // full TTL after construction; the read path must filter alone.
        let cache = Cache::new(Duration::from_millis(100));

        cache.add("u1", vec![0x01, 0x02]).await;
        assert_eq!(cache.get("u1").await, Some(vec![0x01, 0x02]));

        tokio::time::sleep(Duration::from_millis(150)).await;

        assert_eq!(cache.get("u1").await, None);
    }

    #[tokio::test]
    async fn test_cache_drop_releases_store() {
        let cache = Cache::new(Duration::from_millis(20));
        let store = Arc::clone(&cache.store);

        drop(cache);

        // Once the abort lands, the reaper's clone of the store is gone.
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(Arc::strong_count(&store), 1);
    }
}
