//! Deploy Result

use std::path::PathBuf;

use serde_json::json;

use crate::domain::entities::{ArchiveDescriptor, BuildArtifact, DeploymentManifest};
use crate::domain::ports::PutOutcome;
use crate::domain::value_objects::ObjectKey;

/// Outcome of a deploy run
#[derive(Debug, Clone)]
pub struct DeployResult {
    pub artifact: BuildArtifact,
    pub archive: ArchiveDescriptor,
    pub object_key: ObjectKey,
    pub manifest: DeploymentManifest,
    /// `None` on dry runs
    pub manifest_path: Option<PathBuf>,
    /// Set when an object store was configured
    pub published: Option<(String, PutOutcome)>,
    /// Same key and content as the previous recorded deploy
    pub unchanged: bool,
    pub dry_run: bool,
}

impl DeployResult {
    pub fn to_json(&self) -> serde_json::Value {
        json!({
            "output_dir": self.artifact.output_directory().display().to_string(),
            "file_name": self.archive.file_name(),
            "content_path": self.archive.content_path().display().to_string(),
            "hash": self.archive.hash().to_string(),
            "object_key": self.object_key.to_string(),
            "handler": self.manifest.function.handler,
            "manifest_path": self.manifest_path.as_ref().map(|p| p.display().to_string()),
            "published": self.published.as_ref().map(|(location, outcome)| json!({
                "location": location,
                "uploaded": *outcome == PutOutcome::Uploaded,
            })),
            "unchanged": self.unchanged,
            "dry_run": self.dry_run,
        })
    }
}
