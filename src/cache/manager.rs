//! Cache Manager Module
//!
//! Generic in-memory memoization cache with per-entry TTL expiration and
//! bounded-size eviction. All cleanup is lazy: expired entries are removed
//! when read, and a full sweep runs only when an insert finds the cache at
//! capacity. There is no mandatory background timer.

use std::collections::HashMap;
use std::time::Duration;

use crate::cache::{CacheEntry, CacheStats};

// == Cache Config ==
/// Per-instance cache policy.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Default TTL applied when an entry is stored without an override
    pub max_age: Duration,
    /// Entry-count ceiling that triggers a cleanup pass on insert
    pub max_size: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_age: Duration::from_secs(5 * 60),
            max_size: 100,
        }
    }
}

// == Cache Manager ==
/// Bounded, time-expiring key/value store.
///
/// Instances are independent: each owns its mapping, configuration, and
/// statistics, so different workloads can run different policies. Every
/// operation is total — lookups of absent keys and removals of missing
/// entries are normal outcomes, not errors.
#[derive(Debug)]
pub struct CacheManager<T> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<T>>,
    /// Instance policy
    config: CacheConfig,
    /// Exact performance counters
    stats: CacheStats,
}

impl<T: Clone> CacheManager<T> {
    // == Constructor ==
    /// Creates a new CacheManager with the given policy.
    pub fn new(config: CacheConfig) -> Self {
        Self {
            entries: HashMap::new(),
            config,
            stats: CacheStats::new(),
        }
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// Returns `None` if the key is absent or its entry has expired.
    /// Expired entries are removed as a side effect, so readers never
    /// observe a value past its expiration instant.
    pub fn get(&mut self, key: &str) -> Option<T> {
        match self.entries.get(key) {
            Some(entry) if entry.is_expired() => {
                self.entries.remove(key);
                self.stats.set_size(self.entries.len());
                self.stats.record_miss();
                None
            }
            Some(entry) => {
                self.stats.record_hit();
                Some(entry.value.clone())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Set ==
    /// Stores a value under `key`, overwriting any existing entry.
    ///
    /// The entry expires `ttl_override` from now, or `config.max_age` when
    /// no override is given. If the mapping is at or above capacity, a
    /// cleanup pass runs before the insert.
    pub fn set(&mut self, key: String, value: T, ttl_override: Option<Duration>) {
        if self.entries.len() >= self.config.max_size {
            self.cleanup();
        }

        let ttl = ttl_override.unwrap_or(self.config.max_age);
        self.entries.insert(key, CacheEntry::new(value, ttl));
        self.stats.set_size(self.entries.len());
    }

    // == Remove ==
    /// Removes an entry by key. No effect if the key is absent.
    pub fn remove(&mut self, key: &str) {
        self.entries.remove(key);
        self.stats.set_size(self.entries.len());
    }

    // == Clear ==
    /// Empties the mapping entirely.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.stats.set_size(0);
    }

    // == Stats ==
    /// Returns a snapshot of the instance's statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_size(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Purge Expired ==
    /// Removes every expired entry and returns how many were dropped.
    ///
    /// Used by the optional periodic sweep task; lazy callers never need it.
    pub fn purge_expired(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired());
        self.stats.set_size(self.entries.len());
        before - self.entries.len()
    }

    // == Cleanup ==
    /// Capacity-pressure sweep run by `set` when the mapping is full.
    ///
    /// Expired entries go first, independent of the eviction quota. If the
    /// mapping is still at or above capacity, the oldest-by-creation 20% of
    /// `max_size` (at least one entry) are evicted regardless of remaining
    /// TTL, which bounds memory even under sustained load with long TTLs.
    fn cleanup(&mut self) {
        self.purge_expired();

        if self.entries.len() >= self.config.max_size {
            let mut by_age: Vec<(String, std::time::Instant)> = self
                .entries
                .iter()
                .map(|(key, entry)| (key.clone(), entry.created_at))
                .collect();
            by_age.sort_by_key(|(_, created_at)| *created_at);

            let quota = (self.config.max_size / 5).max(1);
            let mut evicted = 0u64;
            for (key, _) in by_age.into_iter().take(quota) {
                self.entries.remove(&key);
                evicted += 1;
            }

            self.stats.record_evictions(evicted);
            self.stats.set_size(self.entries.len());
        }
    }
}
