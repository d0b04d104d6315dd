//! LRU Policy Module
//!
//! Implements Least Recently Used victim selection for cache eviction.

use std::collections::HashMap;

use crate::cache::CacheEntry;

// == LRU Policy ==
/// Chooses the eviction victim by scanning for the oldest read.
///
/// Recency is primarily `last_accessed_at`. The policy also hands out a
/// monotonically increasing tick for every write and successful read, so
/// entries touched within the same millisecond still have a total order:
/// the lower tick was touched first and loses the tie.
#[derive(Debug, Default)]
pub struct LruPolicy {
    /// Last tick handed out
    tick: u64,
}

impl LruPolicy {
    // == Constructor ==
    /// Creates a new policy with the tick counter at zero.
    pub fn new() -> Self {
        Self { tick: 0 }
    }

    // == Next Tick ==
    /// Returns the next recency tick.
    pub fn next_tick(&mut self) -> u64 {
        self.tick += 1;
        self.tick
    }

    // == Select Victim ==
    /// Returns the key with the minimum `(last_accessed_at, recency)`.
    ///
    /// Linear in the number of entries. Returns None if there are no entries.
    pub fn select_victim<'a, V>(
        &self,
        entries: &'a HashMap<String, CacheEntry<V>>,
    ) -> Option<&'a str> {
        entries
            .iter()
            .min_by_key(|(_, entry)| (entry.last_accessed_at, entry.recency))
            .map(|(key, _)| key.as_str())
    }

    // == Reset ==
    pub fn reset(&mut self) {
        self.tick = 0;
    }
}
