//! Zip packager
//!
//! Produces deterministic zip archives: entries sorted by path, fixed
//! timestamps and permissions, so the same directory always yields the same
//! bytes as well as the same identity.

use std::fs;
use std::io::{Seek, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use zip::write::FileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

use crate::domain::entities::{ArchiveDescriptor, AssetType};
use crate::domain::ports::Packager;
use crate::domain::value_objects::{ContentHash, TreeHasher};
use crate::error::{PackError, PackResult};
use crate::infrastructure::fs::{atomic_write, list_files, TreeEntry};

/// Packager that stages zip archives under `<staging_dir>/assets`
#[derive(Debug, Clone)]
pub struct ZipPackager {
    assets_dir: PathBuf,
}

impl ZipPackager {
    pub const ASSETS_DIR: &'static str = "assets";

    pub fn new(staging_dir: impl AsRef<Path>) -> Self {
        Self {
            assets_dir: staging_dir.as_ref().join(Self::ASSETS_DIR),
        }
    }

    pub fn assets_dir(&self) -> &Path {
        &self.assets_dir
    }
}

/// Identity of a directory: hash over every file's relative path and bytes.
pub fn hash_directory(directory: &Path) -> PackResult<ContentHash> {
    let files = existing_files(directory)?;
    hash_entries(&files)
}

fn existing_files(directory: &Path) -> PackResult<Vec<TreeEntry>> {
    if !directory.is_dir() {
        return Err(PackError::MissingArtifact {
            path: directory.to_path_buf(),
        });
    }
    let files = list_files(directory)?;
    if files.is_empty() {
        return Err(PackError::EmptyArtifact {
            path: directory.to_path_buf(),
        });
    }
    Ok(files)
}

fn hash_entries(files: &[TreeEntry]) -> PackResult<ContentHash> {
    let mut hasher = TreeHasher::new();
    for file in files {
        let content = fs::read(&file.path)?;
        hasher.add_file(&file.relative, &content);
    }
    Ok(hasher.finish())
}

/// Write a zip of `files` into `writer`.
fn write_zip<W: Write + Seek>(writer: W, files: &[TreeEntry]) -> PackResult<W> {
    let mut zip = ZipWriter::new(writer);
    let options = FileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(DateTime::default())
        .unix_permissions(0o644);

    for file in files {
        zip.start_file(file.relative.as_str(), options)?;
        zip.write_all(&fs::read(&file.path)?)?;
    }
    Ok(zip.finish()?)
}

impl Packager for ZipPackager {
    fn package_directory(&self, directory: &Path) -> PackResult<ArchiveDescriptor> {
        let files = existing_files(directory)?;
        let hash = hash_entries(&files)?;
        let descriptor = ArchiveDescriptor::new(
            directory,
            &self.assets_dir,
            hash,
            AssetType::Archive,
            "zip",
        );

        let bytes = write_zip(std::io::Cursor::new(Vec::new()), &files)?.into_inner();
        atomic_write(descriptor.content_path(), &bytes)?;

        debug!(files = files.len(), bytes = bytes.len(), "archive written");
        info!(
            hash = %descriptor.hash(),
            path = %descriptor.content_path().display(),
            "packaged directory"
        );
        Ok(descriptor)
    }

    fn package_file(&self, file: &Path) -> PackResult<ArchiveDescriptor> {
        if !file.is_file() {
            return Err(PackError::MissingArtifact {
                path: file.to_path_buf(),
            });
        }

        let content = fs::read(file)?;
        let extension = file
            .extension()
            .map(|e| e.to_string_lossy().into_owned())
            .unwrap_or_else(|| "bin".to_string());
        let descriptor = ArchiveDescriptor::new(
            file,
            &self.assets_dir,
            ContentHash::from_bytes(&content),
            AssetType::File,
            &extension,
        );

        atomic_write(descriptor.content_path(), &content)?;
        info!(hash = %descriptor.hash(), "packaged file");
        Ok(descriptor)
    }
}
