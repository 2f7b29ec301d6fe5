//! Caching Reader Module
//!
//! The read/cache/populate state machine. A `CachingReader` serves exactly
//! one content item over its lifetime: the first `read` call resolves the
//! item from the store (fresh hit) or from the origin (miss, followed by a
//! best-effort write-back), and subsequent calls drain the remainder.

use std::io::{self, Cursor, Read};
use std::time::Duration;

use tracing::{debug, warn};

use crate::error::CacheError;
use crate::origin::OriginFetcher;
use crate::store::{Fetch, ObjectStore};

// == Caching Reader ==
/// Single-use, single-consumer read-through reader.
///
/// Construction performs no I/O; the store/origin round-trip happens lazily
/// on the first `read` call and at most once per instance. The store is
/// borrowed, never owned or closed. Not safe for concurrent use: internal
/// state is unsynchronized and the contract is strictly sequential.
///
/// A zero freshness window is legal and deterministic: nothing is ever
/// fresh, so every read goes to the origin and write-back still runs.
pub struct CachingReader<'s, S, O>
where
    S: ObjectStore + ?Sized,
    O: OriginFetcher,
{
    bucket: String,
    key: String,
    origin: O,
    freshness: Duration,
    store: &'s S,
    /// `Some` once resolution has run; the cursor position tracks how much
    /// the caller has drained. A drained cursor means exhausted.
    content: Option<Cursor<Vec<u8>>>,
}

impl<'s, S, O> CachingReader<'s, S, O>
where
    S: ObjectStore + ?Sized,
    O: OriginFetcher,
{
    // == Constructor ==
    /// Wires a reader over a store and an origin fetcher. No I/O happens
    /// until the first `read` call.
    pub fn new(
        bucket: impl Into<String>,
        key: impl Into<String>,
        origin: O,
        freshness: Duration,
        store: &'s S,
    ) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
            origin,
            freshness,
            store,
            content: None,
        }
    }

    // == Resolve ==
    /// One-time resolution: fresh store hit, or origin fallback with a
    /// best-effort write-back.
    ///
    /// A store error surfaces without consulting the origin: an ambiguous
    /// store failure (auth, throttling, corruption) must not silently turn
    /// into origin load, or a misconfigured store would go unnoticed. A
    /// failed write-back is logged and swallowed; the read still succeeds
    /// with the freshly fetched content.
    fn resolve(&mut self) -> Result<Vec<u8>, CacheError> {
        match self.store.fetch(&self.bucket, &self.key, self.freshness) {
            Ok(Fetch::Hit(body)) => {
                debug!(
                    bucket = %self.bucket,
                    key = %self.key,
                    len = body.len(),
                    "cache hit"
                );
                Ok(body)
            }
            Ok(Fetch::Miss) => {
                debug!(bucket = %self.bucket, key = %self.key, "cache miss, fetching origin");
                let body = self.origin.fetch_origin().map_err(CacheError::Origin)?;
                if let Err(err) = self.store.put(&self.bucket, &self.key, &body) {
                    warn!(
                        bucket = %self.bucket,
                        key = %self.key,
                        error = %err,
                        "cache write-back failed, serving origin content"
                    );
                }
                Ok(body)
            }
            Err(err) => Err(CacheError::Store(err)),
        }
    }
}

impl<'s, S, O> Read for CachingReader<'s, S, O>
where
    S: ObjectStore + ?Sized,
    O: OriginFetcher,
{
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.content.is_none() {
            let body = self.resolve().map_err(io::Error::from)?;
            self.content = Some(Cursor::new(body));
        }
        match self.content.as_mut() {
            Some(cursor) => cursor.read(buf),
            None => Ok(0),
        }
    }
}
