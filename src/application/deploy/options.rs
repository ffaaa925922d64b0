//! Deploy Options
//!
//! Configuration values for one deploy run. Everything the run depends on is
//! carried here explicitly rather than read from process-wide state.

use std::path::PathBuf;

use crate::config::Config;
use crate::domain::entities::{BuildRequest, StackSpec};
use crate::domain::value_objects::{HandlerId, VersionLabel};

/// Caller-supplied deployment inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentConfig {
    /// Absolute path of the function source directory
    pub source_path: PathBuf,
    /// Label that namespaces the remote object key
    pub version: VersionLabel,
}

/// Options for the deploy use case
#[derive(Debug, Clone)]
pub struct DeployOptions {
    pub deployment: DeploymentConfig,
    pub request: BuildRequest,
    pub handler: HandlerId,
    pub stack: StackSpec,
    /// Where the manifest and lockfile are written
    pub staging_dir: PathBuf,
    /// Compute key and manifest only; write nothing besides the archive
    pub dry_run: bool,
}

impl DeployOptions {
    pub const MANIFEST_FILE: &'static str = "manifest.json";

    pub fn new(deployment: DeploymentConfig, config: &Config) -> Self {
        let request = config.build_request(&deployment.source_path);
        let staging_dir = config.staging_dir(&deployment.source_path);
        Self {
            request,
            handler: config.function.handler.clone(),
            stack: config.stack_spec(),
            staging_dir,
            dry_run: false,
            deployment,
        }
    }

    pub fn with_handler(mut self, handler: HandlerId) -> Self {
        self.handler = handler;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.staging_dir.join(Self::MANIFEST_FILE)
    }
}
