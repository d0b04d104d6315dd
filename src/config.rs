//! Configuration Module
//!
//! Handles loading and managing server and cache configuration from
//! environment variables.

use std::env;
use std::str::FromStr;

/// Capacity and default TTL for one named cache instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    /// Maximum number of entries the cache can hold
    pub max_entries: usize,
    /// Default TTL in seconds for entries without explicit TTL
    pub default_ttl: i64,
}

impl CacheConfig {
    pub const fn new(max_entries: usize, default_ttl: i64) -> Self {
        Self {
            max_entries,
            default_ttl,
        }
    }

    /// Reads `<prefix>_MAX_ENTRIES` and `<prefix>_TTL`, falling back to `defaults`.
    fn from_env(prefix: &str, defaults: CacheConfig) -> Self {
        Self {
            max_entries: env_or(&format!("{}_MAX_ENTRIES", prefix), defaults.max_entries),
            default_ttl: env_or(&format!("{}_TTL", prefix), defaults.default_ttl),
        }
    }
}

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Background cleanup task interval in seconds, 0 disables it
    pub cleanup_interval: u64,
    /// Short-lived API response cache
    pub api_cache: CacheConfig,
    /// Product lookup cache
    pub product_cache: CacheConfig,
    /// Session cache
    pub session_cache: CacheConfig,
}

const DEFAULT_API_CACHE: CacheConfig = CacheConfig::new(1000, 300);
const DEFAULT_PRODUCT_CACHE: CacheConfig = CacheConfig::new(500, 3600);
const DEFAULT_SESSION_CACHE: CacheConfig = CacheConfig::new(10_000, 86_400);

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CLEANUP_INTERVAL` - Cleanup frequency in seconds (default: 60)
    /// - `API_CACHE_MAX_ENTRIES` / `API_CACHE_TTL` (default: 1000 / 300)
    /// - `PRODUCT_CACHE_MAX_ENTRIES` / `PRODUCT_CACHE_TTL` (default: 500 / 3600)
    /// - `SESSION_CACHE_MAX_ENTRIES` / `SESSION_CACHE_TTL` (default: 10000 / 86400)
    ///
    /// Unparseable values fall back to the default. Parseable but invalid
    /// values (zero entries, non-positive TTL) are rejected when the caches
    /// are built.
    pub fn from_env() -> Self {
        Self {
            server_port: env_or("SERVER_PORT", 3000),
            cleanup_interval: env_or("CLEANUP_INTERVAL", 60),
            api_cache: CacheConfig::from_env("API_CACHE", DEFAULT_API_CACHE),
            product_cache: CacheConfig::from_env("PRODUCT_CACHE", DEFAULT_PRODUCT_CACHE),
            session_cache: CacheConfig::from_env("SESSION_CACHE", DEFAULT_SESSION_CACHE),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            cleanup_interval: 60,
            api_cache: DEFAULT_API_CACHE,
            product_cache: DEFAULT_PRODUCT_CACHE,
            session_cache: DEFAULT_SESSION_CACHE,
        }
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
