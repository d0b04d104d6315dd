//! Cache Module
//!
//! Provides in-memory caching with TTL expiration and LRU eviction, a JSON
//! serialization layer, named instances and a memoization adapter.

mod clock;
mod codec;
mod entry;
mod lru;
mod memoize;
mod registry;
mod stats;
mod store;


// Re-export public types
pub use clock::{Clock, ManualClock, SystemClock};
pub use codec::EncodedCache;
pub use entry::CacheEntry;
pub use lru::LruPolicy;
pub use memoize::{get_or_fetch, Memoized};
pub use registry::{
    CacheControl, CacheRegistry, SharedCache, API_CACHE, PRODUCT_CACHE, SESSION_CACHE,
};
pub use stats::{CacheStats, Counters};
pub use store::Cache;
