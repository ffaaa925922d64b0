//! Object store port - destination for published archives

use std::path::Path;

use crate::domain::value_objects::ObjectKey;
use crate::error::PackResult;

/// Result of a `put`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PutOutcome {
    /// Object was written
    Uploaded,
    /// An identical object already existed under the key
    Unchanged,
}

/// Bucket/key addressed object storage
pub trait ObjectStore {
    /// Store the file at `source` under `bucket`/`key`.
    fn put(&self, bucket: &str, key: &ObjectKey, source: &Path) -> PackResult<PutOutcome>;

    /// Human-readable location of an object (for output)
    fn location(&self, bucket: &str, key: &ObjectKey) -> String;
}
