//! Error types for lambdapack
//!
//! Library code returns `PackError`; the binary wraps it in `anyhow` for reporting.

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Result type alias for lambdapack operations
pub type PackResult<T> = Result<T, PackError>;

/// Main error type for lambdapack operations
#[derive(Error, Debug)]
pub enum PackError {
    /// Working directory does not exist or is not a directory
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Build entry point is missing from the working directory
    #[error("entry point '{entry}' not found in {working_dir}")]
    MissingEntry { entry: PathBuf, working_dir: PathBuf },

    /// Bundler executable could not be spawned
    #[error("bundler '{program}' could not be started: {source}")]
    BundlerNotFound {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Bundler ran and reported a build error
    #[error("build failed ({program} exited with {status}):\n{diagnostics}")]
    BuildFailed {
        program: String,
        status: ExitStatus,
        diagnostics: String,
    },

    /// Bundle output directory is unsafe to clear before a build
    #[error("invalid out_dir '{out_dir}': {reason}")]
    InvalidOutDir { out_dir: PathBuf, reason: String },

    /// Object key cannot be mapped onto a store location
    #[error("invalid object key '{key}': {reason}")]
    InvalidObjectKey { key: String, reason: String },

    /// Packaging input does not exist
    #[error("build artifact not found: {path}")]
    MissingArtifact { path: PathBuf },

    /// Packaging input exists but holds no files
    #[error("build artifact is empty: {path}")]
    EmptyArtifact { path: PathBuf },

    /// Handler identifier is malformed
    #[error("invalid handler '{value}': {reason}")]
    InvalidHandler { value: String, reason: String },

    /// Version label is malformed
    #[error("invalid version label '{value}': {reason}")]
    InvalidVersion { value: String, reason: String },

    /// Configuration file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Deploy lockfile could not be read or written
    #[error("deploy lockfile {path}: {message}")]
    Lockfile { path: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Directory walk error
    #[error("walk error: {0}")]
    Walk(#[from] ignore::Error),

    /// Archive writer error
    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PackError {
    /// Whether this error belongs to the build-failure class (bad or missing source).
    pub fn is_build_failure(&self) -> bool {
        matches!(
            self,
            PackError::MissingEntry { .. } | PackError::BuildFailed { .. }
        )
    }
}
