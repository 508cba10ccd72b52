//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// Represents a single cache entry: an opaque payload plus its creation stamp.
///
/// The payload is never interpreted or mutated by the cache; it is returned
/// byte-for-byte as it was stored.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored payload
    pub payload: Vec<u8>,
    /// Monotonic creation timestamp
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry stamped with the current time.
    pub fn new(payload: Vec<u8>) -> Self {
        Self {
            payload,
            created_at: Instant::now(),
        }
    }

    // == Age ==
    /// Returns how long ago this entry was created.
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    // == Is Expired ==
    /// Checks if the entry has outlived the given TTL.
    ///
    /// Boundary condition: an entry is stale strictly when its age exceeds
    /// the TTL. An entry whose age equals the TTL is still live, so every
    /// payload handed out satisfies `age <= ttl`.
    ///
    /// This predicate is the only age check in the crate: both the read
    /// path and the reaper's sweep go through it.
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.age() > ttl
    }
}
