//! Object Store Module
//!
//! The cache core addresses its backend through the `ObjectStore` trait:
//! a conditional read that collapses "absent" and "stale" into a single
//! miss, plus an unconditional overwrite write.

mod entry;
mod fs;
mod memory;

// Re-export public types
pub use entry::StoredObject;
pub use fs::FsStore;
pub use memory::MemoryStore;

use std::time::Duration;

use crate::error::BoxError;

// == Fetch Outcome ==
/// Outcome of a conditional store read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fetch {
    /// The key exists and was written within the freshness window.
    /// An empty payload is still a hit.
    Hit(Vec<u8>),
    /// The key is absent, or present but older than the freshness window.
    /// Callers cannot tell the two cases apart; no consumer behavior
    /// depends on the distinction.
    Miss,
}

// == Object Store Trait ==
/// A bucket+key addressed byte store with conditional freshness reads.
///
/// Implementations report `Fetch::Miss` for both "never written" and
/// "written too long ago" (the not-modified-since idiom). Any other failure
/// is an error and must not be folded into a miss.
pub trait ObjectStore {
    /// Conditional read: returns content only if the key exists and was
    /// last written within `freshness` of now.
    fn fetch(&self, bucket: &str, key: &str, freshness: Duration) -> Result<Fetch, BoxError>;

    /// Unconditional overwrite write.
    fn put(&self, bucket: &str, key: &str, body: &[u8]) -> Result<(), BoxError>;
}
