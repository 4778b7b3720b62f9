//! Error types for the catalog service
//!
//! Three layers, each with its own enum:
//! - [`CacheError`] never leaves the cache adapter; it is logged and absorbed.
//! - [`StoreError`] comes out of the product store and is propagated.
//! - [`AppError`] is what handlers return and what becomes an HTTP response.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

use crate::models::ErrorResponse;

// == Cache Error Enum ==
/// Faults raised by a cache backend.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Backend could not be reached or rejected the command
    #[error("Cache backend unavailable: {0}")]
    Unavailable(String),

    /// Cached bytes could not be encoded or decoded
    #[error("Cache serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<redis::RedisError> for CacheError {
    fn from(err: redis::RedisError) -> Self {
        CacheError::Unavailable(err.to_string())
    }
}

/// Result type for cache backend operations.
pub type CacheResult<T> = std::result::Result<T, CacheError>;

// == Store Error Enum ==
/// Faults raised by the product store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// No live record with this id
    #[error("Product with ID {0} not found")]
    NotFound(i64),

    /// Write would violate a uniqueness constraint
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Store could not service the call
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Result type for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

// == App Error Enum ==
/// Request-level error returned by the HTTP handlers.
#[derive(Error, Debug)]
pub enum AppError {
    /// Entity absent or soft-deleted
    #[error("{0}")]
    NotFound(String),

    /// Malformed input, rejected before touching store or cache
    #[error("{0}")]
    InvalidRequest(String),

    /// Uniqueness violation
    #[error("{0}")]
    Conflict(String),

    /// Store fault or anything else unexpected
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => AppError::NotFound(err.to_string()),
            StoreError::Conflict(msg) => AppError::Conflict(msg),
            StoreError::Unavailable(_) => AppError::Internal(err.to_string()),
        }
    }
}

// Body and query-string rejections are plain validation failures
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::InvalidRequest(rejection.body_text())
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
            AppError::Internal(msg) => {
                error!("Request failed: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for handlers.
pub type Result<T> = std::result::Result<T, AppError>;
