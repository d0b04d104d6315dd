//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with LRU eviction and TTL
//! expiration.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::cache::{CacheEntry, CacheStats, Clock, Counters, LruPolicy, SystemClock};
use crate::error::{CacheError, Result};

// == Cache ==
/// In-memory cache with per-entry TTL and LRU eviction.
///
/// Expiration is checked lazily on every read, so correctness never depends
/// on a background sweep having run.
#[derive(Debug)]
pub struct Cache<V> {
    /// Name used in logs and stats reports
    name: String,
    /// Key-value storage
    pub(super) entries: HashMap<String, CacheEntry<V>>,
    /// Eviction victim selection
    lru: LruPolicy,
    /// Hit/miss/eviction counters
    counters: Counters,
    /// Maximum number of entries allowed
    max_size: usize,
    /// TTL in seconds for entries set without an explicit TTL
    default_ttl: i64,
    /// Time source
    clock: Arc<dyn Clock>,
}

impl<V> Cache<V> {
    // == Constructor ==
    /// Creates a cache backed by the system clock.
    ///
    /// # Errors
    /// `InvalidConfig` if `max_size` is 0 or `default_ttl` is not positive.
    pub fn new(max_size: usize, default_ttl: i64) -> Result<Self> {
        Self::with_clock(max_size, default_ttl, Arc::new(SystemClock))
    }

    /// Creates a cache reading time from `clock`.
    pub fn with_clock(max_size: usize, default_ttl: i64, clock: Arc<dyn Clock>) -> Result<Self> {
        if max_size == 0 {
            return Err(CacheError::InvalidConfig(
                "max_size must be greater than zero".to_string(),
            ));
        }
        if default_ttl <= 0 {
            return Err(CacheError::InvalidConfig(format!(
                "default TTL must be positive, got {}s",
                default_ttl
            )));
        }

        Ok(Self {
            name: "cache".to_string(),
            entries: HashMap::new(),
            lru: LruPolicy::new(),
            counters: Counters::default(),
            max_size,
            default_ttl,
            clock,
        })
    }

    /// Sets the name reported in logs.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    // == Set ==
    /// Stores a value, replacing any previous entry under the same key.
    ///
    /// Expired entries are swept first; if the cache is still full and the
    /// key is new, the least recently used entry is evicted. Overwriting is
    /// a full recreation: access stats and creation time start over.
    ///
    /// # Arguments
    /// * `key` - The key to store
    /// * `value` - The value to store
    /// * `ttl_seconds` - TTL in seconds (uses the default if None)
    pub fn set(&mut self, key: impl Into<String>, value: V, ttl_seconds: Option<i64>) {
        let key = key.into();

        self.cleanup_expired();

        if !self.entries.contains_key(&key) && self.entries.len() >= self.max_size {
            self.evict_lru();
        }

        let now = self.clock.now_ms();
        let ttl = ttl_seconds.unwrap_or(self.default_ttl);
        let tick = self.lru.next_tick();
        self.entries
            .insert(key, CacheEntry::new(value, now, ttl, tick));
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// A hit bumps the entry's access count and recency. Missing and expired
    /// keys are misses; expired entries are removed on the spot.
    pub fn get(&mut self, key: &str) -> Option<V>
    where
        V: Clone,
    {
        let now = self.clock.now_ms();

        match self.entries.get(key).map(|entry| entry.is_expired(now)) {
            Some(false) => {
                let tick = self.lru.next_tick();
                let entry = self.entries.get_mut(key)?;
                entry.touch(now, tick);
                self.counters.record_hit();
                Some(entry.value.clone())
            }
            Some(true) => {
                self.purge_expired(key);
                self.counters.record_miss();
                None
            }
            None => {
                self.counters.record_miss();
                None
            }
        }
    }

    // == Has ==
    /// Checks whether a live entry exists without touching access stats.
    ///
    /// Expired entries are removed, same as in `get`.
    pub fn has(&mut self, key: &str) -> bool {
        let now = self.clock.now_ms();

        match self.entries.get(key).map(|entry| entry.is_expired(now)) {
            Some(false) => true,
            Some(true) => {
                self.purge_expired(key);
                false
            }
            None => false,
        }
    }

    // == Delete ==
    /// Removes an entry by key, returning whether anything was removed.
    pub fn delete(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    // == Clear ==
    /// Removes every entry and resets all counters.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.counters.reset();
        self.lru.reset();
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        CacheStats::snapshot(&self.counters, self.entries.len(), self.max_size)
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let now = self.clock.now_ms();
        let before = self.entries.len();

        self.entries.retain(|_, entry| !entry.is_expired(now));

        let removed = before - self.entries.len();
        if removed > 0 {
            self.counters.record_expirations(removed);
            debug!(cache = %self.name, removed, "purged expired entries");
        }
        removed
    }

    // == Inspection ==
    /// Returns the raw entry without affecting stats, expired or not.
    pub fn entry(&self, key: &str) -> Option<&CacheEntry<V>> {
        self.entries.get(key)
    }

    /// Returns the keys currently occupying slots.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    pub fn default_ttl_secs(&self) -> i64 {
        self.default_ttl
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn evict_lru(&mut self) {
        let Some(victim) = self.lru.select_victim(&self.entries).map(str::to_owned) else {
            return;
        };

        self.entries.remove(&victim);
        self.counters.record_eviction();
        debug!(cache = %self.name, key = %victim, "evicted least recently used entry");
    }

    fn purge_expired(&mut self, key: &str) {
        if self.entries.remove(key).is_some() {
            self.counters.record_expirations(1);
            debug!(cache = %self.name, key, "purged expired entry");
        }
    }
}
