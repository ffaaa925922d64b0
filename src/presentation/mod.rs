//! Presentation Layer
//!
//! Wires use cases to their infrastructure dependencies for the CLI.
//!
//! ## Usage
//!
//! ```ignore
//! use lambdapack::presentation::factory;
//!
//! let use_case = factory::create_deploy_use_case(&config, &working_dir, None);
//! let result = use_case.execute(&options)?;
//! ```

pub mod factory;

pub use factory::{create_asset_pipeline, create_deploy_use_case};
