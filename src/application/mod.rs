//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `AssetPipeline` - Bundle a source directory and package the output
//! - `DeployUseCase` - Full flow: bundle, package, key, manifest, publish, lockfile

pub mod deploy;
pub mod pipeline;

pub use deploy::{DeployOptions, DeployResult, DeployUseCase, DeploymentConfig};
pub use pipeline::AssetPipeline;
