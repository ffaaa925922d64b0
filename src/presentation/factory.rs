//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::{Path, PathBuf};

use crate::application::{AssetPipeline, DeployUseCase};
use crate::config::Config;
use crate::infrastructure::{EsbuildBundler, LocalObjectStore, TomlLockfileRepository, ZipPackager};

/// Concrete asset pipeline used by the CLI
pub type ConcreteAssetPipeline = AssetPipeline<EsbuildBundler, ZipPackager>;

/// Concrete deploy use case used by the CLI
pub type ConcreteDeployUseCase = DeployUseCase<EsbuildBundler, ZipPackager, TomlLockfileRepository>;

/// Create the bundle + package pipeline for a project.
pub fn create_asset_pipeline(config: &Config, working_dir: &Path) -> ConcreteAssetPipeline {
    AssetPipeline::new(
        EsbuildBundler::new(&config.bundle.program),
        ZipPackager::new(config.staging_dir(working_dir)),
    )
}

/// Create a deploy use case; `store` enables publishing to a local object store.
pub fn create_deploy_use_case(
    config: &Config,
    working_dir: &Path,
    store: Option<PathBuf>,
) -> ConcreteDeployUseCase {
    let use_case = DeployUseCase::new(
        EsbuildBundler::new(&config.bundle.program),
        ZipPackager::new(config.staging_dir(working_dir)),
        TomlLockfileRepository::new(),
    );

    match store {
        Some(root) => use_case.with_store(Box::new(LocalObjectStore::new(root))),
        None => use_case,
    }
}

