use std::path::Path;

use anyhow::Result;
use lambdapack::domain::ports::PipelineEvent;
use lambdapack::presentation::create_asset_pipeline;
use serde_json::json;

use super::project::load_project;
use super::{event_sink, quiet};
use crate::ui::{json as ui_json, output};

pub fn cmd_bundle(path: &Path, json: bool) -> Result<()> {
    let project = load_project(path)?;
    let events = event_sink("bundle", json, quiet());

    let pipeline = create_asset_pipeline(&project.config, &project.root);
    let artifact = pipeline.bundle(&project.config.build_request(&project.root))?;
    events.on_event(PipelineEvent::Bundled {
        output_dir: artifact.output_directory().to_path_buf(),
    });

    if json {
        ui_json::emit_result(
            "bundle",
            json!({ "output_dir": artifact.output_directory().display().to_string() }),
        )?;
    } else {
        println!("{}", output::render_bundle(artifact.output_directory()));
    }
    Ok(())
}
