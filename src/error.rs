//! Error types for the storefront cache
//!
//! Provides unified error handling using thiserror. A cache miss is not an
//! error: lookups return `Option`, and only configuration, encoding and
//! admin lookups surface a `CacheError`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Cache Error Enum ==
/// Unified error type for the cache layer and its admin API.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Capacity or TTL rejected at construction time
    #[error("Invalid cache configuration: {0}")]
    InvalidConfig(String),

    /// Value could not be encoded into its transport form
    #[error("Failed to encode value for key '{key}': {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Stored transport form could not be decoded into the requested type
    #[error("Failed to decode value for key '{key}': {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// No named cache instance with this name
    #[error("Unknown cache: {0}")]
    UnknownCache(String),

    /// Key not present (admin invalidation only)
    #[error("Key not found: {0}")]
    NotFound(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let status = match &self {
            CacheError::InvalidConfig(_) => StatusCode::BAD_REQUEST,
            CacheError::Encode { .. } | CacheError::Decode { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            CacheError::UnknownCache(_) => StatusCode::NOT_FOUND,
            CacheError::NotFound(_) => StatusCode::NOT_FOUND,
        };

        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache layer.
pub type Result<T> = std::result::Result<T, CacheError>;
