//! TOML Lockfile Repository
//!
//! Persists the deploy lockfile as `deploy.lock` in TOML format.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::entities::{DeployLock, DeployRecord};
use crate::domain::ports::LockfileRepository;
use crate::error::{PackError, PackResult};
use crate::infrastructure::fs::atomic_write;

/// TOML-based deploy lockfile repository
#[derive(Debug, Clone, Copy, Default)]
pub struct TomlLockfileRepository;

impl TomlLockfileRepository {
    pub const FILE_NAME: &'static str = "deploy.lock";

    pub fn new() -> Self {
        Self
    }
}

/// TOML representation of one deployment
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TomlDeployEntry {
    object_key: String,
    hash: String,
    version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    deployed_at: Option<String>,
}

/// TOML representation of the lockfile
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TomlLockfile {
    version: u32,
    #[serde(default)]
    deployments: BTreeMap<String, TomlDeployEntry>,
}

fn lock_error(path: &Path, message: impl Into<String>) -> PackError {
    PackError::Lockfile {
        path: path.to_path_buf(),
        message: message.into(),
    }
}

impl LockfileRepository for TomlLockfileRepository {
    fn load(&self, path: &Path) -> PackResult<DeployLock> {
        if !path.exists() {
            return Ok(DeployLock::new());
        }

        let content = std::fs::read_to_string(path)?;
        let parsed: TomlLockfile =
            toml::from_str(&content).map_err(|e| lock_error(path, e.to_string()))?;

        if parsed.version != DeployLock::FORMAT_VERSION {
            return Err(lock_error(
                path,
                format!(
                    "unsupported lockfile version {} (expected {})",
                    parsed.version,
                    DeployLock::FORMAT_VERSION
                ),
            ));
        }

        let mut lock = DeployLock::new();
        for (stack, entry) in parsed.deployments {
            lock.set(
                stack,
                DeployRecord::from_parts(entry.object_key, entry.hash, entry.version, entry.deployed_at),
            );
        }
        Ok(lock)
    }

    fn save(&self, lock: &DeployLock, path: &Path) -> PackResult<()> {
        let deployments = lock
            .iter()
            .map(|(stack, record)| {
                (
                    stack.clone(),
                    TomlDeployEntry {
                        object_key: record.object_key().to_string(),
                        hash: record.hash().to_string(),
                        version: record.version().to_string(),
                        deployed_at: record.deployed_at().map(str::to_string),
                    },
                )
            })
            .collect();

        let toml_lockfile = TomlLockfile {
            version: lock.version(),
            deployments,
        };

        let content =
            toml::to_string_pretty(&toml_lockfile).map_err(|e| lock_error(path, e.to_string()))?;
        atomic_write(path, content.as_bytes())
    }
}
