//! Asset pipeline
//!
//! Bundles a source directory and packages the result. Shared by the
//! `package`, `key` and `deploy` commands.
//!
//! ## Flow
//!
//! 1. Run the bundler over the working directory
//! 2. Package the output directory into a content-addressed archive

use std::path::Path;

use crate::domain::entities::{ArchiveDescriptor, BuildArtifact, BuildRequest};
use crate::domain::ports::{Bundler, Packager};
use crate::error::PackResult;

/// Bundler + packager, run strictly in sequence
pub struct AssetPipeline<B, P>
where
    B: Bundler,
    P: Packager,
{
    bundler: B,
    packager: P,
}

impl<B, P> AssetPipeline<B, P>
where
    B: Bundler,
    P: Packager,
{
    pub fn new(bundler: B, packager: P) -> Self {
        Self { bundler, packager }
    }

    pub fn bundle(&self, request: &BuildRequest) -> PackResult<BuildArtifact> {
        self.bundler.build(request)
    }

    /// Package an existing directory without running the bundler.
    pub fn package(&self, directory: &Path) -> PackResult<ArchiveDescriptor> {
        self.packager.package_directory(directory)
    }

    /// Bundle, then package the fresh output.
    pub fn build_and_package(
        &self,
        request: &BuildRequest,
    ) -> PackResult<(BuildArtifact, ArchiveDescriptor)> {
        let artifact = self.bundle(request)?;
        let archive = self.package(artifact.output_directory())?;
        Ok((artifact, archive))
    }
}
