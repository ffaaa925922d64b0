use lambdapack::PackError;

/// Render an error chain for stderr, with a fix hint when one is known.
pub fn format_error(err: &anyhow::Error) -> String {
    let mut out = format!("Error: {:#}", err);
    if let Some(hint) = err.downcast_ref::<PackError>().and_then(hint_for) {
        out.push_str("\n  hint: ");
        out.push_str(&hint);
    }
    out
}

fn hint_for(err: &PackError) -> Option<String> {
    match err {
        PackError::MissingEntry { entry, .. } => Some(format!(
            "create {} or set `entry` under [bundle] in lambdapack.toml",
            entry.display()
        )),
        PackError::BundlerNotFound { program, .. } => Some(format!(
            "install {} (npm i -D esbuild) or point LAMBDAPACK_BUNDLER at it",
            program
        )),
        PackError::InvalidHandler { .. } => {
            Some("handlers look like <module>.<function>, e.g. index.handler".to_string())
        }
        PackError::InvalidOutDir { .. } => Some(
            "set `out_dir` under [bundle] to a subdirectory such as \"dist\"".to_string(),
        ),
        PackError::InvalidVersion { .. } => {
            Some("pass --version or set LAMBDAPACK_VERSION".to_string())
        }
        e if e.is_build_failure() => {
            Some("fix the bundler diagnostics above and rerun".to_string())
        }
        _ => None,
    }
}
