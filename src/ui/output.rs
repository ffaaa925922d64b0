use std::path::Path;

use lambdapack::application::DeployResult;
use lambdapack::config::ConfigWarning;
use lambdapack::domain::entities::ArchiveDescriptor;
use lambdapack::domain::ports::PutOutcome;

pub fn print_config_warnings(warnings: &[ConfigWarning]) {
    for w in warnings {
        if let Some(line) = w.line {
            eprintln!("⚠ Unknown config key '{}' in {}:{}", w.key, w.file.display(), line);
        } else {
            eprintln!("⚠ Unknown config key '{}' in {}", w.key, w.file.display());
        }

        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?\n", suggestion);
        }
    }
}

pub fn render_bundle(output_dir: &Path) -> String {
    output_dir.display().to_string()
}

pub fn render_package(archive: &ArchiveDescriptor) -> String {
    format!(
        "file_name: {}\nhash: {}\ncontent_path: {}",
        archive.file_name(),
        archive.hash(),
        archive.content_path().display()
    )
}

pub fn render_deploy(result: &DeployResult) -> String {
    let mut lines = vec![
        format!("object_key: {}", result.object_key),
        format!("hash: {}", result.archive.hash()),
        format!("handler: {}", result.manifest.function.handler),
    ];
    if let Some(path) = &result.manifest_path {
        lines.push(format!("manifest: {}", path.display()));
    }
    if let Some((location, outcome)) = &result.published {
        let state = match outcome {
            PutOutcome::Uploaded => "uploaded",
            PutOutcome::Unchanged => "unchanged",
        };
        lines.push(format!("published: {} ({})", location, state));
    }
    let status = if result.dry_run {
        "dry-run"
    } else if result.unchanged {
        "unchanged"
    } else {
        "deployed"
    };
    lines.push(format!("status: {}", status));
    lines.join("\n")
}
