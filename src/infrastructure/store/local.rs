//! Directory-backed object store
//!
//! Mirrors the remote `<bucket>/<key>` layout on local disk. Useful as a
//! staging area for the provisioning engine and for tests.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::domain::ports::{ObjectStore, PutOutcome};
use crate::domain::value_objects::ObjectKey;
use crate::error::{PackError, PackResult};
use crate::infrastructure::fs::{atomic_write, hash_file};

#[derive(Debug, Clone)]
pub struct LocalObjectStore {
    root: PathBuf,
}

impl LocalObjectStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// On-disk path for an object. Every bucket and key segment must stay
    /// below the store root.
    pub fn object_path(&self, bucket: &str, key: &ObjectKey) -> PackResult<PathBuf> {
        let mut path = self.root.clone();
        for segment in std::iter::once(bucket).chain(key.as_str().split('/')) {
            if matches!(segment, "" | "." | "..") || segment.contains('\\') {
                return Err(PackError::InvalidObjectKey {
                    key: format!("{}/{}", bucket, key),
                    reason: format!("segment '{}' escapes the store", segment),
                });
            }
            path.push(segment);
        }
        Ok(path)
    }
}

impl ObjectStore for LocalObjectStore {
    fn put(&self, bucket: &str, key: &ObjectKey, source: &Path) -> PackResult<PutOutcome> {
        let target = self.object_path(bucket, key)?;

        if target.is_file() && hash_file(&target)? == hash_file(source)? {
            debug!(path = %target.display(), "object unchanged");
            return Ok(PutOutcome::Unchanged);
        }

        let content = std::fs::read(source)?;
        atomic_write(&target, &content)?;
        info!(bucket, key = %key, bytes = content.len(), "object stored");
        Ok(PutOutcome::Uploaded)
    }

    fn location(&self, bucket: &str, key: &ObjectKey) -> String {
        match self.object_path(bucket, key) {
            Ok(path) => path.display().to_string(),
            Err(_) => format!("{}/{}", bucket, key),
        }
    }
}
