//! Configuration module for lambdapack
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (LAMBDAPACK_*)
//! 3. Project config (<working dir>/lambdapack.toml)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{with_env_overrides, ConfigWarning};
pub use types::{
    BundleConfig, Config, DeployConfig, FunctionConfig, PackageConfig,
    BASIC_EXECUTION_POLICY_ARN,
};
