//! Archive descriptor - a content-addressed reference to a packaged asset

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{ContentHash, ObjectKey, VersionLabel};

/// How an asset is packaged for upload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    /// Directory zipped into a single archive
    Archive,
    /// Single file uploaded as-is
    File,
}

/// Packaged asset ready for upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveDescriptor {
    source: PathBuf,
    content_path: PathBuf,
    file_name: String,
    hash: ContentHash,
    asset_type: AssetType,
}

impl ArchiveDescriptor {
    /// Build a descriptor. The file name is derived from the hash, so equal
    /// contents always yield equal file names.
    pub fn new(
        source: impl Into<PathBuf>,
        staging_dir: &Path,
        hash: ContentHash,
        asset_type: AssetType,
        extension: &str,
    ) -> Self {
        let file_name = format!("{}.{}", hash.hex(), extension);
        Self {
            source: source.into(),
            content_path: staging_dir.join(&file_name),
            file_name,
            hash,
            asset_type,
        }
    }

    /// Directory (or file) that was packaged
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Local path of the packaged content
    pub fn content_path(&self) -> &Path {
        &self.content_path
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Content identity
    pub fn hash(&self) -> &ContentHash {
        &self.hash
    }

    pub fn asset_type(&self) -> AssetType {
        self.asset_type
    }

    /// Remote key `<file name>/<version>`
    pub fn object_key(&self, version: &VersionLabel) -> ObjectKey {
        ObjectKey::new(&self.file_name, version)
    }
}
