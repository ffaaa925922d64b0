//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::entities::{
    BuildRequest, BundleOptions, ModuleFormat, Platform, SourceMap, StackSpec,
};
use crate::domain::value_objects::HandlerId;
use crate::error::{PackError, PackResult};

use super::loader::{self, ConfigWarning};

/// Bundler configuration (`[bundle]`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BundleConfig {
    /// Bundler executable
    pub program: String,
    pub entry: PathBuf,
    pub out_dir: PathBuf,
    pub platform: Platform,
    pub target: String,
    pub format: ModuleFormat,
    pub sourcemap: SourceMap,
    pub bundle: bool,
}

impl Default for BundleConfig {
    fn default() -> Self {
        let options = BundleOptions::default();
        Self {
            program: "esbuild".to_string(),
            entry: PathBuf::from(BuildRequest::DEFAULT_ENTRY),
            out_dir: PathBuf::from(BuildRequest::DEFAULT_OUT_DIR),
            platform: options.platform,
            target: options.target,
            format: options.format,
            sourcemap: options.sourcemap,
            bundle: options.bundle,
        }
    }
}

/// Packaging configuration (`[package]`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackageConfig {
    /// Where archives, the manifest and the lockfile are written
    pub staging_dir: PathBuf,
}

impl Default for PackageConfig {
    fn default() -> Self {
        Self {
            staging_dir: PathBuf::from(".lambdapack"),
        }
    }
}

/// Function configuration (`[function]`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FunctionConfig {
    pub name: String,
    pub handler: HandlerId,
    pub runtime: String,
}

impl Default for FunctionConfig {
    fn default() -> Self {
        Self {
            name: "lambda-function".to_string(),
            handler: HandlerId::default(),
            runtime: "nodejs16.x".to_string(),
        }
    }
}

pub const BASIC_EXECUTION_POLICY_ARN: &str =
    "arn:aws:iam::aws:policy/service-role/AWSLambdaBasicExecutionRole";

/// Deployment configuration (`[deploy]`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeployConfig {
    pub stack: String,
    pub region: String,
    /// Version label; usually supplied per run via CLI or environment
    pub version: Option<String>,
    pub bucket_prefix: String,
    pub role_name: String,
    pub managed_policy_arns: Vec<String>,
    pub public_url: bool,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            stack: "lambda".to_string(),
            region: "ap-south-1".to_string(),
            version: None,
            bucket_prefix: "lambda-artifacts".to_string(),
            role_name: "lambda-exec".to_string(),
            managed_policy_arns: vec![BASIC_EXECUTION_POLICY_ARN.to_string()],
            public_url: true,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub bundle: BundleConfig,
    pub package: PackageConfig,
    pub function: FunctionConfig,
    pub deploy: DeployConfig,
}

impl Config {
    /// Project config file name, looked up in the working directory
    pub const FILE_NAME: &'static str = "lambdapack.toml";

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> PackResult<Self> {
        Ok(Self::load_with_warnings(path)?.0)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys)
    pub fn load_with_warnings(path: &Path) -> PackResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load `<working_dir>/lambdapack.toml` if present, then apply environment overrides
    pub fn load_for(working_dir: &Path) -> PackResult<(Self, Vec<ConfigWarning>)> {
        loader::load_for(working_dir)
    }

    pub fn bundle_options(&self) -> BundleOptions {
        BundleOptions {
            platform: self.bundle.platform,
            target: self.bundle.target.clone(),
            format: self.bundle.format,
            sourcemap: self.bundle.sourcemap,
            bundle: self.bundle.bundle,
        }
    }

    pub fn build_request(&self, working_dir: &Path) -> BuildRequest {
        BuildRequest::new(working_dir)
            .with_entry_point(&self.bundle.entry)
            .with_out_dir(&self.bundle.out_dir)
            .with_options(self.bundle_options())
    }

    /// Reject settings that would let a build clear project files.
    pub fn validate(&self, working_dir: &Path) -> PackResult<()> {
        let request = self.build_request(working_dir);
        request.validate_out_dir()?;

        let output = request.output_path();
        let staging = self.staging_dir(working_dir);
        if staging.starts_with(&output) || output.starts_with(&staging) {
            return Err(PackError::InvalidOutDir {
                out_dir: self.bundle.out_dir.clone(),
                reason: format!(
                    "overlaps the staging directory '{}'",
                    self.package.staging_dir.display()
                ),
            });
        }
        Ok(())
    }

    /// Staging directory resolved against the working directory
    pub fn staging_dir(&self, working_dir: &Path) -> PathBuf {
        if self.package.staging_dir.is_absolute() {
            self.package.staging_dir.clone()
        } else {
            working_dir.join(&self.package.staging_dir)
        }
    }

    pub fn stack_spec(&self) -> StackSpec {
        StackSpec {
            stack: self.deploy.stack.clone(),
            region: self.deploy.region.clone(),
            bucket_prefix: self.deploy.bucket_prefix.clone(),
            role_name: self.deploy.role_name.clone(),
            managed_policy_arns: self.deploy.managed_policy_arns.clone(),
            function_name: self.function.name.clone(),
            runtime: self.function.runtime.clone(),
            public_url: self.deploy.public_url,
        }
    }
}
