//! Deploy lockfile entity - remembers the last published archive per stack
//!
//! Pure data; persistence lives in `infrastructure::repositories`.

use std::collections::BTreeMap;

use crate::domain::value_objects::{ContentHash, ObjectKey};

/// Record of one published deployment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployRecord {
    object_key: String,
    hash: String,
    version: String,
    deployed_at: Option<String>,
}

impl DeployRecord {
    pub fn new(key: &ObjectKey, hash: &ContentHash) -> Self {
        let (_, version) = key.parts();
        Self {
            object_key: key.to_string(),
            hash: hash.to_string(),
            version: version.to_string(),
            deployed_at: None,
        }
    }

    pub(crate) fn from_parts(
        object_key: String,
        hash: String,
        version: String,
        deployed_at: Option<String>,
    ) -> Self {
        Self {
            object_key,
            hash,
            version,
            deployed_at,
        }
    }

    pub fn with_deployed_at(mut self, timestamp: impl Into<String>) -> Self {
        self.deployed_at = Some(timestamp.into());
        self
    }

    pub fn object_key(&self) -> &str {
        &self.object_key
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn deployed_at(&self) -> Option<&str> {
        self.deployed_at.as_deref()
    }

    /// Same key and same content as a candidate deployment
    pub fn matches(&self, key: &ObjectKey, hash: &ContentHash) -> bool {
        self.object_key == key.as_str() && hash.matches_str(&self.hash)
    }
}

/// All recorded deployments, keyed by stack name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployLock {
    version: u32,
    deployments: BTreeMap<String, DeployRecord>,
}

impl Default for DeployLock {
    fn default() -> Self {
        Self::new()
    }
}

impl DeployLock {
    pub const FORMAT_VERSION: u32 = 1;

    pub fn new() -> Self {
        Self {
            version: Self::FORMAT_VERSION,
            deployments: BTreeMap::new(),
        }
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn get(&self, stack: &str) -> Option<&DeployRecord> {
        self.deployments.get(stack)
    }

    pub fn set(&mut self, stack: impl Into<String>, record: DeployRecord) {
        self.deployments.insert(stack.into(), record);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &DeployRecord)> {
        self.deployments.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.deployments.is_empty()
    }

    /// True when `stack` was last deployed with this exact key and content
    pub fn is_unchanged(&self, stack: &str, key: &ObjectKey, hash: &ContentHash) -> bool {
        self.get(stack).is_some_and(|r| r.matches(key, hash))
    }
}
