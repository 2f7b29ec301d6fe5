//! Filesystem Store Backend
//!
//! Persists objects as `<root>/<bucket>/<key>` files and derives freshness
//! from the file modification time, so cached content survives restarts.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::time::Duration;

use tracing::debug;

use crate::error::BoxError;
use crate::store::{Fetch, ObjectStore};

// == Fs Store ==
/// Filesystem-backed object store rooted at a directory.
#[derive(Debug, Clone)]
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    // == Constructor ==
    /// Creates a store rooted at `root`. The directory is created lazily on
    /// the first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolves `<root>/<bucket>/<key>`, rejecting keys that would escape
    /// the bucket directory. Keys may contain `/` and map to subdirectories.
    fn object_path(&self, bucket: &str, key: &str) -> Result<PathBuf, BoxError> {
        let rel = Path::new(key);
        if rel.is_absolute()
            || rel
                .components()
                .any(|c| matches!(c, Component::ParentDir))
        {
            return Err(format!("key escapes bucket directory: {key}").into());
        }
        Ok(self.root.join(bucket).join(rel))
    }
}

impl ObjectStore for FsStore {
    fn fetch(&self, bucket: &str, key: &str, freshness: Duration) -> Result<Fetch, BoxError> {
        let path = self.object_path(bucket, key)?;

        let meta = match fs::metadata(&path) {
            Ok(meta) => meta,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Fetch::Miss),
            Err(err) => return Err(err.into()),
        };

        let age = meta
            .modified()?
            .elapsed()
            .unwrap_or(Duration::ZERO);
        if age >= freshness {
            debug!(bucket, key, age_secs = age.as_secs(), "stored file is stale");
            return Ok(Fetch::Miss);
        }

        match fs::read(&path) {
            Ok(body) => Ok(Fetch::Hit(body)),
            // Removed between the stat and the read
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Fetch::Miss),
            Err(err) => Err(err.into()),
        }
    }

    fn put(&self, bucket: &str, key: &str, body: &[u8]) -> Result<(), BoxError> {
        let path = self.object_path(bucket, key)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, body)?;
        Ok(())
    }
}
