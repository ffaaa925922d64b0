//! Test environment for isolated lambdapack runs.
//!
//! Provides `TestEnv` - a temp project directory, a temp tools directory
//! holding a fake bundler, and helpers to run the CLI against them.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

use super::fixtures::{FAKE_ESBUILD, HANDLER_SOURCE};

/// Result of running a lambdapack CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as NDJSON
    pub fn json_lines(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l)
                    .unwrap_or_else(|e| panic!("stdout line is not JSON ({e}): {l}"))
            })
            .collect()
    }
}

/// Isolated test environment
pub struct TestEnv {
    /// Function project directory
    pub project_root: TempDir,
    /// Scratch directory for bundler scripts and object stores
    pub tools_dir: TempDir,
    bundler: PathBuf,
    bin: PathBuf,
}

impl TestEnv {
    /// Empty project with the deterministic fake bundler installed.
    pub fn new() -> Self {
        let project_root = tempfile::tempdir().expect("Failed to create project dir");
        let tools_dir = tempfile::tempdir().expect("Failed to create tools dir");
        let bundler = tools_dir.path().join("esbuild");
        let env = Self {
            project_root,
            tools_dir,
            bundler,
            bin: PathBuf::from(env!("CARGO_BIN_EXE_lambdapack")),
        };
        env.install_bundler(FAKE_ESBUILD);
        env
    }

    /// Project with `src/index.ts` exporting `handler`.
    pub fn with_function() -> Self {
        let env = Self::new();
        env.write_project_file("src/index.ts", HANDLER_SOURCE);
        env
    }

    /// Replace the bundler script.
    pub fn install_bundler(&self, script: &str) {
        fs::write(&self.bundler, script).expect("Failed to write bundler script");
        make_executable(&self.bundler);
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn tools_path(&self, relative: &str) -> PathBuf {
        self.tools_dir.path().join(relative)
    }

    pub fn write_project_file(&self, relative: &str, content: &str) {
        let path = self.project_path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create directories");
        }
        fs::write(&path, content).expect("Failed to write project file");
    }

    pub fn read_project_file(&self, relative: &str) -> String {
        fs::read_to_string(self.project_path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {relative}: {e}"))
    }

    /// Run the CLI from the project root.
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run the CLI from the project root with extra env vars.
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(self.project_root.path(), args, env_vars)
    }

    pub fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(cwd)
            .args(args)
            .env_remove("RUST_LOG")
            .env_remove("LAMBDAPACK_VERSION")
            .env_remove("LAMBDAPACK_HANDLER")
            .env_remove("LAMBDAPACK_REGION")
            .env_remove("LAMBDAPACK_STAGING_DIR")
            .env("LAMBDAPACK_BUNDLER", &self.bundler);

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute lambdapack");
        output_to_result(output)
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

#[cfg(unix)]
fn make_executable(path: &Path) {
    use std::os::unix::fs::PermissionsExt;
    let mut perms = fs::metadata(path).expect("bundler metadata").permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).expect("Failed to chmod bundler");
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) {}
