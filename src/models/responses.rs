//! Response DTOs for the admin API
//!
//! Defines the structure of outgoing HTTP response bodies.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::cache::CacheStats;

/// Response body for the stats endpoint (GET /caches)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Per-instance statistics keyed by cache name
    pub caches: BTreeMap<String, CacheStats>,
    /// Entries across every instance
    pub total_entries: usize,
}

impl StatsResponse {
    /// Creates a new StatsResponse from the registry report
    pub fn new(caches: BTreeMap<String, CacheStats>) -> Self {
        let total_entries = caches.values().map(|stats| stats.size).sum();
        Self {
            caches,
            total_entries,
        }
    }
}

/// Response body for the clear endpoints (DELETE /caches, DELETE /caches/:name)
#[derive(Debug, Clone, Serialize)]
pub struct ClearResponse {
    /// Success message
    pub message: String,
    /// The caches that were cleared
    pub cleared: Vec<String>,
}

impl ClearResponse {
    /// Creates a new ClearResponse
    pub fn new<I, S>(cleared: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let cleared: Vec<String> = cleared.into_iter().map(Into::into).collect();
        Self {
            message: format!("Cleared {}", cleared.join(", ")),
            cleared,
        }
    }
}

/// Response body for key invalidation (DELETE /caches/:name/:key)
#[derive(Debug, Clone, Serialize)]
pub struct InvalidateResponse {
    /// Success message
    pub message: String,
    /// Cache the key was removed from
    pub cache: String,
    /// The key that was removed
    pub key: String,
}

impl InvalidateResponse {
    /// Creates a new InvalidateResponse
    pub fn new(cache: impl Into<String>, key: impl Into<String>) -> Self {
        let cache = cache.into();
        let key = key.into();
        Self {
            message: format!("Key '{}' removed from '{}'", key, cache),
            cache,
            key,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
