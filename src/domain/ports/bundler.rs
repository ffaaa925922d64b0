//! Bundler port - turns a source tree into a deployable output directory

use crate::domain::entities::{BuildArtifact, BuildRequest};
use crate::error::PackResult;

/// External bundler
///
/// Implementations:
/// - `EsbuildBundler` - runs the esbuild executable
///
/// A build is blocking and not retried: any error is fatal for the run and
/// no partial output may be left behind.
pub trait Bundler {
    /// Build `request`, replacing any previous output directory.
    fn build(&self, request: &BuildRequest) -> PackResult<BuildArtifact>;
}
