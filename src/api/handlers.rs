//! API Handlers
//!
//! HTTP request handlers for each admin endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::cache::{CacheRegistry, CacheStats, SystemClock};
use crate::error::{CacheError, Result};
use crate::models::{ClearResponse, HealthResponse, InvalidateResponse, StatsResponse};

/// Application state shared across all handlers.
///
/// The registry is a bundle of `Arc` handles, so cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    /// Named cache instances
    pub caches: CacheRegistry,
}

impl AppState {
    /// Creates a new AppState around an existing registry.
    pub fn new(caches: CacheRegistry) -> Self {
        Self { caches }
    }

    /// Creates a new AppState from configuration, on the system clock.
    pub fn from_config(config: &crate::config::Config) -> Result<Self> {
        let caches = CacheRegistry::from_config(config, Arc::new(SystemClock))?;
        Ok(Self::new(caches))
    }
}

/// Handler for GET /caches
///
/// Returns statistics for every named cache.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse::new(state.caches.stats().await))
}

/// Handler for GET /caches/:name
pub async fn cache_stats_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<CacheStats>> {
    Ok(Json(state.caches.stats_for(&name).await?))
}

/// Handler for DELETE /caches
///
/// Clears every named cache, entries and counters.
pub async fn clear_all_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    state.caches.clear_all().await;
    Json(ClearResponse::new(state.caches.names()))
}

/// Handler for DELETE /caches/:name
pub async fn clear_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<ClearResponse>> {
    state.caches.clear(&name).await?;
    Ok(Json(ClearResponse::new([name])))
}

/// Handler for DELETE /caches/:name/:key
///
/// Invalidates a single key, e.g. after the underlying record changed.
pub async fn invalidate_handler(
    State(state): State<AppState>,
    Path((name, key)): Path<(String, String)>,
) -> Result<Json<InvalidateResponse>> {
    if !state.caches.invalidate(&name, &key).await? {
        return Err(CacheError::NotFound(key));
    }

    Ok(Json(InvalidateResponse::new(name, key)))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{ManualClock, API_CACHE, PRODUCT_CACHE};
    use crate::config::Config;

    fn test_state() -> AppState {
        let registry =
            CacheRegistry::from_config(&Config::default(), Arc::new(ManualClock::new(0))).unwrap();
        AppState::new(registry)
    }

    #[tokio::test]
    async fn test_stats_handler() {
        let state = test_state();

        let response = stats_handler(State(state)).await;
        assert_eq!(response.caches.len(), 3);
        assert_eq!(response.total_entries, 0);
        assert_eq!(response.caches[API_CACHE].hit_count, 0);
    }

    #[tokio::test]
    async fn test_cache_stats_handler_unknown() {
        let state = test_state();

        let result = cache_stats_handler(State(state), Path("orders".to_string())).await;
        assert!(matches!(result, Err(CacheError::UnknownCache(_))));
    }

    #[tokio::test]
    async fn test_clear_handler() {
        let state = test_state();
        state
            .caches
            .products()
            .write()
            .await
            .set("product:1", &1, None)
            .unwrap();

        let response = clear_handler(State(state.clone()), Path(PRODUCT_CACHE.to_string()))
            .await
            .unwrap();
        assert_eq!(response.cleared, vec![PRODUCT_CACHE]);
        assert!(state.caches.products().read().await.is_empty());
    }

    #[tokio::test]
    async fn test_clear_all_handler() {
        let state = test_state();
        state
            .caches
            .sessions()
            .write()
            .await
            .set("s", "x".to_string(), None);

        let response = clear_all_handler(State(state.clone())).await;
        assert_eq!(response.cleared.len(), 3);
        assert!(state.caches.sessions().read().await.is_empty());
    }

    #[tokio::test]
    async fn test_invalidate_handler() {
        let state = test_state();
        state
            .caches
            .api()
            .write()
            .await
            .set("GET /products", &["a", "b"], None)
            .unwrap();

        let path = Path((API_CACHE.to_string(), "GET /products".to_string()));
        assert!(invalidate_handler(State(state.clone()), path).await.is_ok());

        let path = Path((API_CACHE.to_string(), "GET /products".to_string()));
        let result = invalidate_handler(State(state), path).await;
        assert!(matches!(result, Err(CacheError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
