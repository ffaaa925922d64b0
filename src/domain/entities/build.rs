//! Build request and build artifact
//!
//! A `BuildRequest` is created once per run and handed to a `Bundler`.
//! The resulting `BuildArtifact` is an opaque output directory.

use std::fmt;
use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PackError, PackResult};

/// Platform the bundle is built for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Node,
    Browser,
    Neutral,
}

impl Platform {
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Node => "node",
            Platform::Browser => "browser",
            Platform::Neutral => "neutral",
        }
    }
}

/// Module output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ModuleFormat {
    #[default]
    Cjs,
    Esm,
    Iife,
}

impl ModuleFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            ModuleFormat::Cjs => "cjs",
            ModuleFormat::Esm => "esm",
            ModuleFormat::Iife => "iife",
        }
    }
}

/// Source map emission mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SourceMap {
    #[default]
    Linked,
    Inline,
    External,
    Both,
    None,
}

impl SourceMap {
    pub fn as_str(self) -> &'static str {
        match self {
            SourceMap::Linked => "linked",
            SourceMap::Inline => "inline",
            SourceMap::External => "external",
            SourceMap::Both => "both",
            SourceMap::None => "none",
        }
    }
}

/// Bundler knobs that stay fixed for a deployment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleOptions {
    pub platform: Platform,
    /// Language compatibility level (e.g. `es2018`, `node16`)
    pub target: String,
    pub format: ModuleFormat,
    pub sourcemap: SourceMap,
    pub bundle: bool,
}

impl Default for BundleOptions {
    fn default() -> Self {
        Self {
            platform: Platform::Node,
            target: "es2018".to_string(),
            format: ModuleFormat::Cjs,
            sourcemap: SourceMap::Linked,
            bundle: true,
        }
    }
}

/// One bundling job
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildRequest {
    working_directory: PathBuf,
    entry_point: PathBuf,
    out_dir: PathBuf,
    options: BundleOptions,
}

impl BuildRequest {
    pub const DEFAULT_ENTRY: &'static str = "src/index.ts";
    pub const DEFAULT_OUT_DIR: &'static str = "dist";

    /// Request with the default `src/index.ts` entry and `dist` output.
    pub fn new(working_directory: impl Into<PathBuf>) -> Self {
        Self {
            working_directory: working_directory.into(),
            entry_point: PathBuf::from(Self::DEFAULT_ENTRY),
            out_dir: PathBuf::from(Self::DEFAULT_OUT_DIR),
            options: BundleOptions::default(),
        }
    }

    pub fn with_entry_point(mut self, entry: impl Into<PathBuf>) -> Self {
        self.entry_point = entry.into();
        self
    }

    pub fn with_out_dir(mut self, out_dir: impl Into<PathBuf>) -> Self {
        self.out_dir = out_dir.into();
        self
    }

    pub fn with_options(mut self, options: BundleOptions) -> Self {
        self.options = options;
        self
    }

    pub fn working_directory(&self) -> &Path {
        &self.working_directory
    }

    /// Entry point relative to the working directory
    pub fn entry_point(&self) -> &Path {
        &self.entry_point
    }

    /// Output directory relative to the working directory
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    pub fn options(&self) -> &BundleOptions {
        &self.options
    }

    pub fn entry_path(&self) -> PathBuf {
        self.working_directory.join(&self.entry_point)
    }

    pub fn output_path(&self) -> PathBuf {
        self.working_directory.join(&self.out_dir)
    }

    /// The output directory is cleared before every build, so it must be a
    /// plain subdirectory of the working directory that does not hold the entry.
    pub fn validate_out_dir(&self) -> PackResult<()> {
        let invalid = |reason: &str| PackError::InvalidOutDir {
            out_dir: self.out_dir.clone(),
            reason: reason.to_string(),
        };

        if self.out_dir.as_os_str().is_empty() {
            return Err(invalid("must not be empty"));
        }
        if !self
            .out_dir
            .components()
            .all(|c| matches!(c, Component::Normal(_)))
        {
            return Err(invalid(
                "must be a relative path without '.', '..' or root segments",
            ));
        }

        let entry: PathBuf = self
            .entry_point
            .components()
            .filter(|c| !matches!(c, Component::CurDir))
            .collect();
        if entry.starts_with(&self.out_dir) {
            return Err(invalid("must not contain the entry point"));
        }
        Ok(())
    }
}

/// Output directory produced by a bundler
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildArtifact {
    output_directory: PathBuf,
}

impl BuildArtifact {
    pub fn new(output_directory: impl Into<PathBuf>) -> Self {
        Self {
            output_directory: output_directory.into(),
        }
    }

    pub fn output_directory(&self) -> &Path {
        &self.output_directory
    }
}

impl fmt::Display for BuildArtifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.output_directory.display())
    }
}
