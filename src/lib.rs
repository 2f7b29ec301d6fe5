//! Readthru - a read-through byte cache
//!
//! Serves cached bytes from an object store when a fresh copy exists, falls
//! back to an origin fetch on a miss, and writes the result back to the
//! store best-effort. The core is [`CachingReader`]; everything it needs is
//! injected through the [`ObjectStore`] and [`OriginFetcher`] seams.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod origin;
pub mod store;
pub mod tasks;

pub use api::AppState;
pub use cache::CachingReader;
pub use config::Config;
pub use error::{BoxError, CacheError};
pub use origin::{origin_fn, HttpOrigin, OriginFetcher};
pub use store::{Fetch, FsStore, MemoryStore, ObjectStore};
pub use tasks::spawn_sweeper_task;
