use std::path::{Path, PathBuf};

use anyhow::Result;
use lambdapack::domain::ports::PipelineEvent;
use lambdapack::presentation::create_asset_pipeline;
use serde_json::json;

use super::project::load_project;
use super::{event_sink, quiet};
use crate::ui::{json as ui_json, output};

pub fn cmd_package(path: &Path, dir: Option<PathBuf>, json: bool) -> Result<()> {
    let project = load_project(path)?;
    let events = event_sink("package", json, quiet());
    let pipeline = create_asset_pipeline(&project.config, &project.root);

    let directory = match dir {
        // Relative --dir is taken from the invocation directory, like any CLI path.
        Some(dir) => dir,
        None => {
            let artifact = pipeline.bundle(&project.config.build_request(&project.root))?;
            events.on_event(PipelineEvent::Bundled {
                output_dir: artifact.output_directory().to_path_buf(),
            });
            artifact.output_directory().to_path_buf()
        }
    };

    let archive = pipeline.package(&directory)?;
    events.on_event(PipelineEvent::Packaged {
        file_name: archive.file_name().to_string(),
        hash: archive.hash().to_string(),
        content_path: archive.content_path().to_path_buf(),
    });

    if json {
        ui_json::emit_result(
            "package",
            json!({
                "file_name": archive.file_name(),
                "hash": archive.hash().to_string(),
                "content_path": archive.content_path().display().to_string(),
                "source": archive.source().display().to_string(),
                "type": "archive",
            }),
        )?;
    } else {
        println!("{}", output::render_package(&archive));
    }
    Ok(())
}
