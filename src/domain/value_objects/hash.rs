//! Content Hash Value Object
//!
//! A validated, immutable SHA-256 hash. Used as the identity of packaged
//! build artifacts and for change detection in the deploy lockfile.

use std::fmt;

use sha2::{Digest, Sha256};

/// Content hash value object
///
/// Wraps a SHA-256 hash string with the `sha256:` prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash(String);

impl ContentHash {
    /// Prefix for SHA-256 hashes
    pub const PREFIX: &'static str = "sha256:";

    /// Create a new ContentHash from a raw hash string (with or without prefix)
    pub fn new(raw_hash: &str) -> Self {
        if raw_hash.starts_with(Self::PREFIX) {
            Self(raw_hash.to_string())
        } else {
            Self(format!("{}{}", Self::PREFIX, raw_hash))
        }
    }

    /// Compute SHA-256 of a byte slice
    pub fn from_bytes(content: &[u8]) -> Self {
        Self::from_digest(Sha256::digest(content))
    }

    pub(crate) fn from_digest(digest: impl fmt::LowerHex) -> Self {
        Self(format!("{}{:x}", Self::PREFIX, digest))
    }

    /// Get the full hash string with prefix
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get just the hex part without prefix
    pub fn hex(&self) -> &str {
        self.0.strip_prefix(Self::PREFIX).unwrap_or(&self.0)
    }

    /// Check if this hash matches a raw string (with or without prefix)
    pub fn matches_str(&self, s: &str) -> bool {
        if s.starts_with(Self::PREFIX) {
            self.0 == s
        } else {
            self.hex() == s
        }
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Incremental hasher for a set of files.
///
/// Each file contributes its normalized relative path, its length and its
/// bytes. Callers must feed files in a stable order.
#[derive(Default)]
pub struct TreeHasher {
    hasher: Sha256,
    files: usize,
}

impl TreeHasher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one file. `relative_path` must use `/` separators.
    pub fn add_file(&mut self, relative_path: &str, content: &[u8]) {
        self.hasher.update(relative_path.as_bytes());
        self.hasher.update([0u8]);
        self.hasher.update((content.len() as u64).to_le_bytes());
        self.hasher.update(content);
        self.files += 1;
    }

    /// Number of files added so far
    pub fn file_count(&self) -> usize {
        self.files
    }

    pub fn finish(self) -> ContentHash {
        ContentHash::from_digest(self.hasher.finalize())
    }
}
