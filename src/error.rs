//! Error types for the read-through cache
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Boxed error type used at the store/origin collaborator seams.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

// == Cache Error Enum ==
/// Unified error type for the read-through cache.
///
/// Write-back failures deliberately have no variant: a failed cache write
/// is logged and the read still succeeds with the origin content, so it can
/// never leak into a result.
#[derive(Error, Debug)]
pub enum CacheError {
    /// The object store failed in a way that is not a miss (auth,
    /// throttling, corruption). Fatal to the read; origin is not consulted.
    #[error("object store error: {0}")]
    Store(#[source] BoxError),

    /// The origin fetch failed after a cache miss. Fatal to the read, no
    /// retry at this layer.
    #[error("origin fetch failed: {0}")]
    Origin(#[source] BoxError),

    /// Host-side failure outside the store/origin round-trip
    #[error("internal error: {0}")]
    Internal(String),
}

// == io::Error Bridges ==
// The reader exposes std::io::Read, so cache errors cross the io boundary
// and are recovered on the other side.
impl From<CacheError> for std::io::Error {
    fn from(err: CacheError) -> Self {
        std::io::Error::new(std::io::ErrorKind::Other, err)
    }
}

impl From<std::io::Error> for CacheError {
    fn from(err: std::io::Error) -> Self {
        match err.downcast::<CacheError>() {
            Ok(cache_err) => cache_err,
            Err(err) => CacheError::Internal(err.to_string()),
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let status = match &self {
            CacheError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            CacheError::Origin(_) => StatusCode::BAD_GATEWAY,
            CacheError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache.
pub type Result<T> = std::result::Result<T, CacheError>;
