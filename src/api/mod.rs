//! API Module
//!
//! HTTP handlers and routing for the cache admin API.
//!
//! # Endpoints
//! - `GET /health` - Health check endpoint
//! - `GET /caches` - Stats for every named cache
//! - `GET /caches/:name` - Stats for one cache
//! - `DELETE /caches` - Clear every cache
//! - `DELETE /caches/:name` - Clear one cache
//! - `DELETE /caches/:name/:key` - Invalidate one key

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
