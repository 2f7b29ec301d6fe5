//! In-Memory Store Backend
//!
//! HashMap-backed object store for hosting without external storage and for
//! tests. Stale objects linger until `purge_stale` runs; the background
//! sweeper task calls it periodically.

use std::collections::HashMap;
use std::sync::RwLock;
use std::time::Duration;

use tracing::debug;

use crate::error::BoxError;
use crate::store::{Fetch, ObjectStore, StoredObject};

// == Memory Store ==
/// In-memory object store keyed by (bucket, key).
///
/// Interior locking makes it shareable across threads; individual calls are
/// short and blocking.
#[derive(Debug, Default)]
pub struct MemoryStore {
    objects: RwLock<HashMap<(String, String), StoredObject>>,
}

impl MemoryStore {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // == Purge Stale ==
    /// Removes every object older than `window`.
    ///
    /// Returns the number of objects removed.
    pub fn purge_stale(&self, window: Duration) -> usize {
        let mut objects = self.objects.write().unwrap_or_else(|e| e.into_inner());
        let before = objects.len();
        objects.retain(|_, obj| obj.is_fresh(window));
        before - objects.len()
    }

    // == Length ==
    /// Current number of stored objects, fresh or stale.
    pub fn len(&self) -> usize {
        self.objects
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }

    /// Returns true if the store holds no objects.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ObjectStore for MemoryStore {
    fn fetch(&self, bucket: &str, key: &str, freshness: Duration) -> Result<Fetch, BoxError> {
        let objects = self.objects.read().unwrap_or_else(|e| e.into_inner());
        match objects.get(&(bucket.to_string(), key.to_string())) {
            Some(obj) if obj.is_fresh(freshness) => Ok(Fetch::Hit(obj.body.clone())),
            Some(obj) => {
                debug!(
                    bucket,
                    key,
                    age_secs = obj.age().as_secs(),
                    "stored object is stale"
                );
                Ok(Fetch::Miss)
            }
            None => Ok(Fetch::Miss),
        }
    }

    fn put(&self, bucket: &str, key: &str, body: &[u8]) -> Result<(), BoxError> {
        let mut objects = self.objects.write().unwrap_or_else(|e| e.into_inner());
        objects.insert(
            (bucket.to_string(), key.to_string()),
            StoredObject::new(body.to_vec()),
        );
        Ok(())
    }
}
