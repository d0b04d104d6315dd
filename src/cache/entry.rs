//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL and access
//! bookkeeping.

// == Cache Entry ==
/// Represents a single cache entry with value and metadata.
///
/// All timestamps are Unix milliseconds taken from the owning cache's clock.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Creation timestamp
    pub created_at: i64,
    /// Absolute expiration timestamp
    pub expires_at: i64,
    /// Successful reads since the entry was (re)created
    pub access_count: u64,
    /// Timestamp of the last successful read, or creation
    pub last_accessed_at: i64,
    /// Logical access sequence, breaks ties between equal `last_accessed_at`
    pub(crate) recency: u64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a fresh entry that expires `ttl_seconds` after `now`.
    ///
    /// A zero or negative TTL produces an entry that is already expired.
    pub fn new(value: V, now: i64, ttl_seconds: i64, recency: u64) -> Self {
        let expires_at = now.saturating_add(ttl_seconds.saturating_mul(1000));

        Self {
            value,
            created_at: now,
            expires_at,
            access_count: 0,
            last_accessed_at: now,
            recency,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired at `now`.
    ///
    /// The expiration instant itself counts as expired, so once the TTL has
    /// fully elapsed the entry is gone and a zero TTL never yields a hit.
    pub fn is_expired(&self, now: i64) -> bool {
        now >= self.expires_at
    }

    // == Touch ==
    /// Records a successful read.
    pub(crate) fn touch(&mut self, now: i64, recency: u64) {
        self.access_count += 1;
        self.last_accessed_at = now;
        self.recency = recency;
    }

    // == Time To Live ==
    /// Returns remaining TTL in milliseconds, 0 once expired.
    pub fn ttl_remaining_ms(&self, now: i64) -> u64 {
        (self.expires_at - now).max(0) as u64
    }
}
