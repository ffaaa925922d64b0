use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use lambdapack::config::Config;
use lambdapack::PackError;
use tracing::debug;

use crate::ui::output::print_config_warnings;

/// A resolved function project: absolute working directory plus its config.
pub struct Project {
    pub root: PathBuf,
    pub config: Config,
}

pub fn load_project(path: &Path) -> Result<Project> {
    if !path.is_dir() {
        return Err(PackError::DirectoryNotFound {
            path: path.to_path_buf(),
        }
        .into());
    }
    let root = path
        .canonicalize()
        .with_context(|| format!("failed to resolve {}", path.display()))?;

    let (config, warnings) = Config::load_for(&root)?;
    print_config_warnings(&warnings);
    debug!(root = %root.display(), "project loaded");

    Ok(Project { root, config })
}
