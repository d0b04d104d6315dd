//! API Routes
//!
//! Configures the Axum router with all admin endpoints.

use axum::{
    routing::{delete, get},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    cache_stats_handler, clear_all_handler, clear_handler, health_handler, invalidate_handler,
    stats_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /health` - Health check endpoint
/// - `GET /caches` - Stats for every named cache
/// - `GET /caches/:name` - Stats for one cache
/// - `DELETE /caches` - Clear every cache
/// - `DELETE /caches/:name` - Clear one cache
/// - `DELETE /caches/:name/:key` - Invalidate one key
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_handler))
        .route("/caches", get(stats_handler).delete(clear_all_handler))
        .route(
            "/caches/:name",
            get(cache_stats_handler).delete(clear_handler),
        )
        .route("/caches/:name/:key", delete(invalidate_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
