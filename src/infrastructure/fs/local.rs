//! Local file system helpers
//!
//! Atomic writes, file hashing and deterministic directory listing shared by
//! the packager, the object store and the lockfile repository.

use std::io::Write;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use sha2::{Digest, Sha256};
use tempfile::NamedTempFile;

use crate::domain::value_objects::ContentHash;
use crate::error::PackResult;

/// A regular file found under a directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    /// Path relative to the walked root, `/`-separated
    pub relative: String,
    /// Absolute path on disk
    pub path: PathBuf,
}

/// Normalize a relative path for hashing and archive entry names.
fn normalize_relative_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// List every regular file under `root`, sorted by normalized relative path.
///
/// Hidden files and ignore files are not filtered: the archive must contain
/// exactly what the bundler produced. Symlinks are not followed.
pub fn list_files(root: &Path) -> PackResult<Vec<TreeEntry>> {
    let mut entries = Vec::new();

    for result in WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .build()
    {
        let entry = result?;
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        let relative = entry
            .path()
            .strip_prefix(root)
            .map(normalize_relative_path)
            .unwrap_or_else(|_| normalize_relative_path(entry.path()));
        entries.push(TreeEntry {
            relative,
            path: entry.into_path(),
        });
    }

    entries.sort_by(|a, b| a.relative.cmp(&b.relative));
    Ok(entries)
}

/// Write `content` to `path` via a sibling temp file and rename.
pub fn atomic_write(path: &Path, content: &[u8]) -> PackResult<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent)?;

    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Compute the SHA-256 of a file's content.
pub fn hash_file(path: &Path) -> PackResult<ContentHash> {
    let mut file = std::fs::File::open(path)?;
    let mut hasher = Sha256::new();
    std::io::copy(&mut file, &mut hasher)?;
    Ok(ContentHash::from_digest(hasher.finalize()))
}

/// Remove a directory tree if present.
pub fn remove_dir_if_exists(path: &Path) -> PackResult<()> {
    match std::fs::remove_dir_all(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}
