//! esbuild bundler
//!
//! Runs the `esbuild` executable synchronously from the working directory.

use std::ffi::OsString;
use std::process::Command;

use tracing::{debug, info, warn};

use crate::domain::entities::{BuildArtifact, BuildRequest, SourceMap};
use crate::domain::ports::Bundler;
use crate::error::{PackError, PackResult};
use crate::infrastructure::fs::remove_dir_if_exists;

/// Bundler backed by the esbuild CLI
#[derive(Debug, Clone)]
pub struct EsbuildBundler {
    program: OsString,
}

impl Default for EsbuildBundler {
    fn default() -> Self {
        Self::new("esbuild")
    }
}

impl EsbuildBundler {
    /// Use `program` (a name on `PATH` or a path to an executable).
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &std::ffi::OsStr {
        &self.program
    }

    /// Command-line arguments for a request, relative to its working directory.
    pub fn args(request: &BuildRequest) -> Vec<OsString> {
        let opts = request.options();
        let mut args: Vec<OsString> = vec![request.entry_point().as_os_str().to_os_string()];

        if opts.bundle {
            args.push("--bundle".into());
        }
        args.push(format!("--platform={}", opts.platform.as_str()).into());
        args.push(format!("--target={}", opts.target).into());
        args.push(format!("--format={}", opts.format.as_str()).into());
        if opts.sourcemap != SourceMap::None {
            args.push(format!("--sourcemap={}", opts.sourcemap.as_str()).into());
        }

        let mut outdir = OsString::from("--outdir=");
        outdir.push(request.out_dir().as_os_str());
        args.push(outdir);
        args.push("--log-level=warning".into());
        args
    }

    fn program_name(&self) -> String {
        self.program.to_string_lossy().into_owned()
    }
}

impl Bundler for EsbuildBundler {
    fn build(&self, request: &BuildRequest) -> PackResult<BuildArtifact> {
        let working_dir = request.working_directory();
        if !working_dir.is_dir() {
            return Err(PackError::DirectoryNotFound {
                path: working_dir.to_path_buf(),
            });
        }

        let entry = request.entry_path();
        if !entry.is_file() {
            return Err(PackError::MissingEntry {
                entry: request.entry_point().to_path_buf(),
                working_dir: working_dir.to_path_buf(),
            });
        }

        request.validate_out_dir()?;
        let output_dir = request.output_path();
        remove_dir_if_exists(&output_dir)?;

        let args = Self::args(request);
        info!(
            entry = %request.entry_point().display(),
            working_dir = %working_dir.display(),
            "bundling"
        );
        debug!(program = %self.program_name(), ?args, "running bundler");

        let output = Command::new(&self.program)
            .args(&args)
            .current_dir(working_dir)
            .output()
            .map_err(|source| PackError::BundlerNotFound {
                program: self.program_name(),
                source,
            })?;

        if !output.status.success() {
            // A failed build must not leave a usable-looking artifact behind.
            if let Err(e) = remove_dir_if_exists(&output_dir) {
                warn!(error = %e, path = %output_dir.display(), "failed to remove partial output");
            }
            let mut diagnostics = String::from_utf8_lossy(&output.stderr).trim().to_string();
            if diagnostics.is_empty() {
                diagnostics = String::from_utf8_lossy(&output.stdout).trim().to_string();
            }
            return Err(PackError::BuildFailed {
                program: self.program_name(),
                status: output.status,
                diagnostics,
            });
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        for line in stderr.lines().filter(|l| !l.trim().is_empty()) {
            warn!(target: "lambdapack::bundler", "{}", line);
        }

        if !output_dir.is_dir() {
            return Err(PackError::MissingArtifact { path: output_dir });
        }

        info!(output = %output_dir.display(), "bundle complete");
        Ok(BuildArtifact::new(output_dir))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{BundleOptions, ModuleFormat};
    use std::fs;
    use tempfile::tempdir;

    fn strings(args: Vec<OsString>) -> Vec<String> {
        args.into_iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn default_args_match_node_cjs_build() {
        let req = BuildRequest::new("/w");
        assert_eq!(
            strings(EsbuildBundler::args(&req)),
            vec![
                "src/index.ts",
                "--bundle",
                "--platform=node",
                "--target=es2018",
                "--format=cjs",
                "--sourcemap=linked",
                "--outdir=dist",
                "--log-level=warning",
            ]
        );
    }

    #[test]
    fn sourcemap_none_and_no_bundle_drop_flags() {
        let opts = BundleOptions {
            sourcemap: SourceMap::None,
            bundle: false,
            format: ModuleFormat::Esm,
            ..BundleOptions::default()
        };
        let args = strings(EsbuildBundler::args(&BuildRequest::new("/w").with_options(opts)));
        assert!(!args.iter().any(|a| a.starts_with("--sourcemap")));
        assert!(!args.contains(&"--bundle".to_string()));
        assert!(args.contains(&"--format=esm".to_string()));
    }

    #[test]
    fn missing_entry_fails_before_touching_output() {
        let dir = tempdir().unwrap();
        let stale = dir.path().join("dist");
        fs::create_dir_all(&stale).unwrap();
        fs::write(stale.join("index.js"), "old").unwrap();

        let err = EsbuildBundler::new("does-not-matter")
            .build(&BuildRequest::new(dir.path()))
            .unwrap_err();

        assert!(matches!(err, PackError::MissingEntry { .. }));
        assert!(stale.join("index.js").exists());
    }

    #[test]
    fn unsafe_out_dir_is_rejected_before_clearing() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("src")).unwrap();
        fs::write(dir.path().join("src/index.ts"), "export const handler = 1;").unwrap();
        fs::write(dir.path().join("package.json"), "{}").unwrap();

        for out_dir in [".", ""] {
            let err = EsbuildBundler::new("does-not-matter")
                .build(&BuildRequest::new(dir.path()).with_out_dir(out_dir))
                .unwrap_err();
            assert!(matches!(err, PackError::InvalidOutDir { .. }));
        }

        assert!(dir.path().join("src/index.ts").is_file());
        assert!(dir.path().join("package.json").is_file());
    }

    #[test]
    fn missing_working_dir_is_reported() {
        let dir = tempdir().unwrap();
        let err = EsbuildBundler::default()
            .build(&BuildRequest::new(dir.path().join("nope")))
            .unwrap_err();
        assert!(matches!(err, PackError::DirectoryNotFound { .. }));
    }

    #[test]
    fn unknown_program_is_bundler_not_found() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("src")).unwrap();
        fs::write(dir.path().join("src/index.ts"), "export const handler = 1;").unwrap();

        let err = EsbuildBundler::new("lambdapack-no-such-bundler-xyz")
            .build(&BuildRequest::new(dir.path()))
            .unwrap_err();

        assert!(matches!(err, PackError::BundlerNotFound { .. }));
        assert!(!dir.path().join("dist").exists());
    }

    #[cfg(unix)]
    mod unix {
        use super::*;
        use std::os::unix::fs::PermissionsExt;

        fn script(dir: &std::path::Path, body: &str) -> std::path::PathBuf {
            let path = dir.join("fake-esbuild.sh");
            fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
            path
        }

        fn project() -> tempfile::TempDir {
            let dir = tempdir().unwrap();
            fs::create_dir_all(dir.path().join("src")).unwrap();
            fs::write(
                dir.path().join("src/index.ts"),
                "export const handler = async () => ({ statusCode: 200 });\n",
            )
            .unwrap();
            dir
        }

        #[test]
        fn successful_build_replaces_output() {
            let dir = project();
            let tools = tempdir().unwrap();
            let bin = script(tools.path(), "mkdir -p dist && cp src/index.ts dist/index.js");

            fs::create_dir_all(dir.path().join("dist")).unwrap();
            fs::write(dir.path().join("dist/stale.js"), "stale").unwrap();

            let artifact = EsbuildBundler::new(&bin)
                .build(&BuildRequest::new(dir.path()))
                .unwrap();

            assert_eq!(artifact.output_directory(), dir.path().join("dist"));
            assert!(dir.path().join("dist/index.js").exists());
            assert!(!dir.path().join("dist/stale.js").exists());
        }

        #[test]
        fn failed_build_surfaces_diagnostics_and_removes_partial_output() {
            let dir = project();
            let tools = tempdir().unwrap();
            let bin = script(
                tools.path(),
                "mkdir -p dist && echo partial > dist/index.js\necho 'ERROR: Expected \";\"' >&2\nexit 1",
            );

            let err = EsbuildBundler::new(&bin)
                .build(&BuildRequest::new(dir.path()))
                .unwrap_err();

            match err {
                PackError::BuildFailed { diagnostics, .. } => {
                    assert!(diagnostics.contains("Expected"))
                }
                other => panic!("unexpected error: {other}"),
            }
            assert!(!dir.path().join("dist").exists());
        }

        #[test]
        fn success_without_output_is_missing_artifact() {
            let dir = project();
            let tools = tempdir().unwrap();
            let bin = script(tools.path(), "exit 0");

            let err = EsbuildBundler::new(&bin)
                .build(&BuildRequest::new(dir.path()))
                .unwrap_err();
            assert!(matches!(err, PackError::MissingArtifact { .. }));
        }
    }
}
