//! Origin Fetcher Module
//!
//! The origin is the authoritative source of truth, consulted only after a
//! confirmed cache miss. The core sees it as a zero-argument synchronous
//! producer of bytes; this module also provides the HTTP-backed
//! implementation used by the hosting binary.

use std::sync::OnceLock;

use tracing::debug;

use crate::error::BoxError;

// == Origin Fetcher Trait ==
/// Zero-argument synchronous producer of the canonical content.
///
/// The cache core never retries an origin call: it cannot know whether the
/// call is idempotent or how expensive a retry would be. Retry policy, if
/// any, belongs to the implementation.
pub trait OriginFetcher {
    /// Produces the canonical content.
    fn fetch_origin(&mut self) -> Result<Vec<u8>, BoxError>;
}

// == Closure Adapter ==
/// Origin fetcher backed by a closure.
///
/// Built with [`origin_fn`]; keeps closure-captured context out of the
/// trait's signature.
pub struct OriginFn<F>(F);

/// Wraps a closure as an [`OriginFetcher`].
pub fn origin_fn<F>(f: F) -> OriginFn<F>
where
    F: FnMut() -> Result<Vec<u8>, BoxError>,
{
    OriginFn(f)
}

impl<F> OriginFetcher for OriginFn<F>
where
    F: FnMut() -> Result<Vec<u8>, BoxError>,
{
    fn fetch_origin(&mut self) -> Result<Vec<u8>, BoxError> {
        (self.0)()
    }
}

/// A fetcher can be lent without giving up ownership.
impl<O: OriginFetcher + ?Sized> OriginFetcher for &mut O {
    fn fetch_origin(&mut self) -> Result<Vec<u8>, BoxError> {
        (**self).fetch_origin()
    }
}

// == Http Origin ==
// Shared across requests; reqwest's blocking client maintains its own
// connection pool.
static HTTP_CLIENT: OnceLock<reqwest::blocking::Client> = OnceLock::new();

/// Origin fetcher backed by an upstream HTTP service.
///
/// Must be driven from a blocking context (the hosting handlers run it on
/// `spawn_blocking`): the client is created lazily on first use because
/// `reqwest::blocking` refuses to operate inside an async runtime.
#[derive(Debug, Clone)]
pub struct HttpOrigin {
    url: String,
}

impl HttpOrigin {
    /// Creates a fetcher for a single upstream URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl OriginFetcher for HttpOrigin {
    fn fetch_origin(&mut self) -> Result<Vec<u8>, BoxError> {
        let client = HTTP_CLIENT.get_or_init(reqwest::blocking::Client::new);

        debug!(url = %self.url, "fetching origin content");
        let response = client.get(&self.url).send()?.error_for_status()?;
        Ok(response.bytes()?.to_vec())
    }
}
