//! Domain Entities
//!
//! - `BuildRequest` / `BuildArtifact` - one bundling job and its output directory
//! - `ArchiveDescriptor` - content-addressed packaged asset
//! - `DeploymentManifest` - declarative resource wiring for the provisioning engine
//! - `DeployLock` - last published archive per stack

mod archive;
mod build;
mod lockfile;
mod manifest;

pub use archive::{ArchiveDescriptor, AssetType};
pub use build::{BuildArtifact, BuildRequest, BundleOptions, ModuleFormat, Platform, SourceMap};
pub use lockfile::{DeployLock, DeployRecord};
pub use manifest::{
    AssetSection, BucketSection, DeploymentManifest, EndpointSection, FunctionSection,
    PermissionSection, RoleSection, StackSpec, LAMBDA_SERVICE_PRINCIPAL, PUBLIC_URL_STATEMENT_ID,
};
