use std::path::Path;

use anyhow::Result;
use lambdapack::domain::ports::PipelineEvent;
use lambdapack::domain::value_objects::VersionLabel;
use lambdapack::presentation::create_asset_pipeline;
use serde_json::json;

use super::project::load_project;
use super::{event_sink, quiet};
use crate::ui::json as ui_json;

pub fn cmd_key(path: &Path, version: &str, json: bool) -> Result<()> {
    // Reject a bad label before spending time on a build.
    let version = VersionLabel::parse(version)?;
    let project = load_project(path)?;
    let events = event_sink("key", json, quiet());
    let pipeline = create_asset_pipeline(&project.config, &project.root);

    let (artifact, archive) =
        pipeline.build_and_package(&project.config.build_request(&project.root))?;
    events.on_event(PipelineEvent::Bundled {
        output_dir: artifact.output_directory().to_path_buf(),
    });
    events.on_event(PipelineEvent::Packaged {
        file_name: archive.file_name().to_string(),
        hash: archive.hash().to_string(),
        content_path: archive.content_path().to_path_buf(),
    });

    let key = archive.object_key(&version);
    events.on_event(PipelineEvent::Keyed {
        object_key: key.to_string(),
    });

    if json {
        ui_json::emit_result(
            "key",
            json!({
                "object_key": key.to_string(),
                "file_name": archive.file_name(),
                "version": version.as_str(),
            }),
        )?;
    } else {
        println!("{}", key);
    }
    Ok(())
}
