//! Version label and remote object key
//!
//! The object key is the only wire-visible naming contract:
//! `<archive file name>/<version label>`.

use std::fmt;

use serde::Serialize;

use crate::error::PackError;

/// Caller-supplied deployment version label (e.g. `0.0.5`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct VersionLabel(String);

impl VersionLabel {
    pub fn parse(value: &str) -> Result<Self, PackError> {
        let invalid = |reason: &str| PackError::InvalidVersion {
            value: value.to_string(),
            reason: reason.to_string(),
        };

        if value.is_empty() {
            return Err(invalid("must not be empty"));
        }
        if value == "." || value == ".." {
            return Err(invalid("must not be a relative path segment"));
        }
        if value.contains('/') {
            return Err(invalid("must not contain '/'"));
        }
        if value.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(invalid("must not contain whitespace"));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VersionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Remote object key for an archive
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ObjectKey(String);

impl ObjectKey {
    pub fn new(file_name: &str, version: &VersionLabel) -> Self {
        Self(format!("{}/{}", file_name, version))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Split back into `(file_name, version)`.
    pub fn parts(&self) -> (&str, &str) {
        self.0.rsplit_once('/').unwrap_or((&self.0, ""))
    }
}

impl fmt::Display for ObjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_accepts_semver_like_labels() {
        assert_eq!(VersionLabel::parse("0.0.5").unwrap().as_str(), "0.0.5");
        assert!(VersionLabel::parse("2024-06-01.rc1").is_ok());
    }

    #[test]
    fn version_rejects_bad_labels() {
        assert!(VersionLabel::parse("").is_err());
        assert!(VersionLabel::parse("a/b").is_err());
        assert!(VersionLabel::parse("1 0").is_err());
    }

    #[test]
    fn version_rejects_dot_segments() {
        assert!(VersionLabel::parse(".").is_err());
        assert!(VersionLabel::parse("..").is_err());
        assert!(VersionLabel::parse("...").is_ok());
        assert!(VersionLabel::parse(".1").is_ok());
    }

    #[test]
    fn key_is_file_name_slash_version() {
        let v = VersionLabel::parse("0.0.5").unwrap();
        let key = ObjectKey::new("abc.zip", &v);
        assert_eq!(key.as_str(), "abc.zip/0.0.5");
        assert_eq!(key.parts(), ("abc.zip", "0.0.5"));
    }
}
