//! Storefront Cache - in-process memoization for the storefront backend
//!
//! Provides TTL expiration and LRU eviction over named cache instances,
//! with an admin HTTP surface for stats and invalidation.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::{create_router, AppState};
pub use cache::{
    get_or_fetch, Cache, CacheControl, CacheEntry, CacheRegistry, CacheStats, Clock,
    EncodedCache, ManualClock, Memoized, SharedCache, SystemClock,
};
pub use config::{CacheConfig, Config};
pub use error::CacheError;
pub use tasks::spawn_cleanup_task;
