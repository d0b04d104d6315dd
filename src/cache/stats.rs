//! Cache Statistics Module
//!
//! Tracks cache performance metrics including hits, misses, and evictions.

use serde::Serialize;

// == Counters ==
/// Cumulative counters kept by a cache since creation or the last clear.
#[derive(Debug, Clone, Default)]
pub struct Counters {
    /// Successful `get` calls
    pub hits: u64,
    /// `get` calls that found nothing usable
    pub misses: u64,
    /// Entries removed by the LRU policy
    pub evictions: u64,
    /// Entries purged because their TTL elapsed
    pub expirations: u64,
}

impl Counters {
    // == Record Hit ==
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    // == Record Miss ==
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    // == Record Eviction ==
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    // == Record Expirations ==
    pub fn record_expirations(&mut self, count: usize) {
        self.expirations += count as u64;
    }

    // == Reset ==
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

// == Cache Stats ==
/// Point-in-time statistics snapshot for one cache.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CacheStats {
    /// Current number of entries in the cache
    pub size: usize,
    /// Capacity bound
    pub max_size: usize,
    /// Total `get` calls (hits + misses)
    pub access_count: u64,
    /// Number of successful cache retrievals
    pub hit_count: u64,
    /// Number of failed cache retrievals (key not found or expired)
    pub miss_count: u64,
    /// hit_count / access_count, or 0.0 with no accesses
    pub hit_rate: f64,
    /// miss_count / access_count, or 0.0 with no accesses
    pub miss_rate: f64,
    /// Number of entries evicted due to LRU policy
    pub evictions: u64,
    /// Number of entries purged after their TTL elapsed
    pub expirations: u64,
}

impl CacheStats {
    // == Snapshot ==
    /// Builds a snapshot from the live counters.
    pub fn snapshot(counters: &Counters, size: usize, max_size: usize) -> Self {
        let access_count = counters.hits + counters.misses;

        Self {
            size,
            max_size,
            access_count,
            hit_count: counters.hits,
            miss_count: counters.misses,
            hit_rate: ratio(counters.hits, access_count),
            miss_rate: ratio(counters.misses, access_count),
            evictions: counters.evictions,
            expirations: counters.expirations,
        }
    }
}

fn ratio(part: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_empty() {
        let stats = CacheStats::snapshot(&Counters::default(), 0, 10);
        assert_eq!(stats.size, 0);
        assert_eq!(stats.max_size, 10);
        assert_eq!(stats.access_count, 0);
        assert_eq!(stats.hit_rate, 0.0);
        assert_eq!(stats.miss_rate, 0.0);
    }

    #[test]
    fn test_rates_all_hits() {
        let mut counters = Counters::default();
        counters.record_hit();
        counters.record_hit();
        counters.record_hit();

        let stats = CacheStats::snapshot(&counters, 1, 10);
        assert_eq!(stats.access_count, 3);
        assert_eq!(stats.hit_rate, 1.0);
        assert_eq!(stats.miss_rate, 0.0);
    }

    #[test]
    fn test_rates_mixed() {
        let mut counters = Counters::default();
        counters.record_hit();
        counters.record_miss();
        counters.record_miss();
        counters.record_miss();

        let stats = CacheStats::snapshot(&counters, 0, 10);
        assert_eq!(stats.access_count, 4);
        assert_eq!(stats.hit_rate, 0.25);
        assert_eq!(stats.miss_rate, 0.75);
    }

    #[test]
    fn test_evictions_and_expirations() {
        let mut counters = Counters::default();
        counters.record_eviction();
        counters.record_eviction();
        counters.record_expirations(3);

        let stats = CacheStats::snapshot(&counters, 0, 10);
        assert_eq!(stats.evictions, 2);
        assert_eq!(stats.expirations, 3);
    }

    #[test]
    fn test_reset_zeroes_everything() {
        let mut counters = Counters::default();
        counters.record_hit();
        counters.record_miss();
        counters.record_eviction();
        counters.record_expirations(1);

        counters.reset();

        let stats = CacheStats::snapshot(&counters, 0, 10);
        assert_eq!(stats, CacheStats::snapshot(&Counters::default(), 0, 10));
    }

    #[test]
    fn test_stats_serialize() {
        let stats = CacheStats::snapshot(&Counters::default(), 2, 5);
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["size"], 2);
        assert_eq!(json["max_size"], 5);
        assert_eq!(json["hit_rate"], 0.0);
    }
}
