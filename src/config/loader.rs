//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::value_objects::HandlerId;
use crate::error::{PackError, PackResult};

use super::types::Config;

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> PackResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| PackError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load the project config of `working_dir` (or defaults) with env overrides applied.
pub fn load_for(working_dir: &Path) -> PackResult<(Config, Vec<ConfigWarning>)> {
    let path = working_dir.join(Config::FILE_NAME);
    let (config, warnings) = if path.is_file() {
        debug!(path = %path.display(), "loading config");
        load_with_warnings(&path)?
    } else {
        (Config::default(), Vec::new())
    };

    let config = with_env_overrides(config, |key| std::env::var(key).ok())?;
    config.validate(working_dir)?;
    Ok((config, warnings))
}

/// Apply `LAMBDAPACK_*` overrides. `lookup` returns the value of an
/// environment variable, if set.
pub fn with_env_overrides<F>(mut config: Config, lookup: F) -> PackResult<Config>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(version) = lookup("LAMBDAPACK_VERSION").filter(|v| !v.is_empty()) {
        config.deploy.version = Some(version);
    }

    if let Some(handler) = lookup("LAMBDAPACK_HANDLER").filter(|v| !v.is_empty()) {
        config.function.handler = HandlerId::parse(&handler)?;
    }

    if let Some(program) = lookup("LAMBDAPACK_BUNDLER").filter(|v| !v.is_empty()) {
        config.bundle.program = program;
    }

    if let Some(region) = lookup("LAMBDAPACK_REGION").filter(|v| !v.is_empty()) {
        config.deploy.region = region;
    }

    if let Some(dir) = lookup("LAMBDAPACK_STAGING_DIR").filter(|v| !v.is_empty()) {
        config.package.staging_dir = PathBuf::from(dir);
    }

    Ok(config)
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

pub(super) fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "bundle",
        "program",
        "entry",
        "out_dir",
        "platform",
        "target",
        "format",
        "sourcemap",
        "package",
        "staging_dir",
        "function",
        "name",
        "handler",
        "runtime",
        "deploy",
        "stack",
        "region",
        "version",
        "bucket_prefix",
        "role_name",
        "managed_policy_arns",
        "public_url",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
