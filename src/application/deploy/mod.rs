//! Deploy Module
//!
//! ## Structure
//!
//! - `options` - Inputs for one run (`DeploymentConfig`, `DeployOptions`)
//! - `result` - Result type (`DeployResult`)
//! - `use_case` - Core use case logic (`DeployUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use lambdapack::application::deploy::{DeployOptions, DeployUseCase, DeploymentConfig};
//!
//! let use_case = DeployUseCase::new(bundler, packager, lockfile_repo);
//! let result = use_case.execute(&DeployOptions::new(deployment, &config))?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::{DeployOptions, DeploymentConfig};
pub use result::DeployResult;
pub use use_case::DeployUseCase;
