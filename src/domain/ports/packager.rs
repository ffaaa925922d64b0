//! Packager port - wraps build output into a content-addressed archive

use std::path::Path;

use crate::domain::entities::ArchiveDescriptor;
use crate::error::PackResult;

/// Asset packager
///
/// Identical contents must always produce the same descriptor identity.
pub trait Packager {
    /// Package every file under `directory` into one archive.
    fn package_directory(&self, directory: &Path) -> PackResult<ArchiveDescriptor>;

    /// Package a single file as-is.
    fn package_file(&self, file: &Path) -> PackResult<ArchiveDescriptor>;
}
