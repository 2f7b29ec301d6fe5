//! API Handlers
//!
//! HTTP request handlers for the read-through cache endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};

use crate::cache::CachingReader;
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::models::HealthResponse;
use crate::origin::HttpOrigin;
use crate::store::ObjectStore;

/// Application state shared across all handlers.
///
/// The store is held behind the `ObjectStore` trait so the handlers never
/// depend on a concrete backend.
#[derive(Clone)]
pub struct AppState {
    /// Shared object store backend
    pub store: Arc<dyn ObjectStore + Send + Sync>,
    /// Server configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates a new AppState over a store backend and configuration.
    pub fn new(store: Arc<dyn ObjectStore + Send + Sync>, config: Config) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }
}

/// Handler for GET /content/:key
///
/// Runs one read-through cycle: cached bytes if a fresh copy exists,
/// otherwise the upstream origin with a best-effort write-back. The reader
/// is synchronous by contract, so the cycle runs on the blocking pool.
pub async fn content_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Response> {
    let body = tokio::task::spawn_blocking(move || read_through(&state, &key))
        .await
        .map_err(|err| CacheError::Internal(format!("read task failed: {err}")))??;

    Ok((
        [(header::CONTENT_TYPE, "application/octet-stream")],
        body,
    )
        .into_response())
}

/// One blocking read-through cycle against the configured store and origin.
fn read_through(state: &AppState, key: &str) -> Result<Vec<u8>> {
    let origin = HttpOrigin::new(origin_url(&state.config.upstream_url, key));
    let mut reader = CachingReader::new(
        state.config.bucket.clone(),
        key,
        origin,
        state.config.freshness(),
        state.store.as_ref(),
    );

    let mut body = Vec::new();
    std::io::Read::read_to_end(&mut reader, &mut body).map_err(CacheError::from)?;
    Ok(body)
}

fn origin_url(upstream: &str, key: &str) -> String {
    format!("{}/{}", upstream.trim_end_matches('/'), key)
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
    use crate::store::MemoryStore;

    fn test_state(upstream_url: &str) -> AppState {
        let config = Config {
            bucket: "test-bucket".to_string(),
            upstream_url: upstream_url.to_string(),
            ..Config::default()
        };
        AppState::new(Arc::new(MemoryStore::new()), config)
    }

    #[tokio::test]
    async fn test_content_handler_serves_cached_bytes() {
        // Upstream is unreachable; a successful response proves the bytes
        // came from the store.
        let state = test_state("http://127.0.0.1:1");
        state
            .store
            .put("test-bucket", "greeting", b"hello from cache")
            .unwrap();

        let result = content_handler(State(state), Path("greeting".to_string())).await;
        let response = result.unwrap();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        assert_eq!(&bytes[..], b"hello from cache");
    }

    #[tokio::test]
    async fn test_content_handler_miss_with_unreachable_upstream() {
        let state = test_state("http://127.0.0.1:1");

        let result = content_handler(State(state), Path("missing".to_string())).await;

        assert!(matches!(result, Err(CacheError::Origin(_))));
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }

    #[test]
    fn test_origin_url_joins_cleanly() {
        assert_eq!(origin_url("http://up:8080", "k"), "http://up:8080/k");
        assert_eq!(origin_url("http://up:8080/", "k"), "http://up:8080/k");
        assert_eq!(origin_url("http://up:8080", "a/b"), "http://up:8080/a/b");
    }
}
