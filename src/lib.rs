//! lambdapack - bundle, package and publish TypeScript serverless functions
//!
//! A function project (`src/index.ts` by default) is bundled with esbuild,
//! packaged into a deterministic zip named after its content hash, and bound
//! to a versioned object key (`<hash>.zip/<version>`). The `deploy` flow also
//! writes a declarative deployment manifest and records each deploy in a
//! lockfile so repeated runs can report "unchanged".

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{AssetPipeline, DeployOptions, DeployResult, DeployUseCase, DeploymentConfig};
pub use config::Config;
pub use domain::entities::{ArchiveDescriptor, BuildArtifact, BuildRequest, DeploymentManifest};
pub use domain::value_objects::{ContentHash, HandlerId, ObjectKey, VersionLabel};
pub use error::{PackError, PackResult};
