use std::path::PathBuf;

use anyhow::{anyhow, Result};
use lambdapack::application::{DeployOptions, DeploymentConfig};
use lambdapack::domain::value_objects::{HandlerId, VersionLabel};
use lambdapack::presentation::create_deploy_use_case;

use super::project::load_project;
use super::{console, event_sink};
use crate::ui::output;

pub struct DeployArgs {
    pub path: PathBuf,
    pub version: Option<String>,
    pub handler: Option<String>,
    pub store: Option<PathBuf>,
    pub dry_run: bool,
}

pub fn cmd_deploy(args: DeployArgs, json: bool) -> Result<()> {
    let project = load_project(&args.path)?;
    let config = &project.config;

    // CLI flags win over env and file.
    let label = args
        .version
        .or_else(|| config.deploy.version.clone())
        .ok_or_else(|| anyhow!("no version label: pass --version or set LAMBDAPACK_VERSION"))?;
    let version = VersionLabel::parse(&label)?;

    let mut options = DeployOptions::new(
        DeploymentConfig {
            source_path: project.root.clone(),
            version,
        },
        config,
    )
    .with_dry_run(args.dry_run);
    if let Some(handler) = args.handler {
        options = options.with_handler(HandlerId::parse(&handler)?);
    }

    let use_case = create_deploy_use_case(config, &project.root, args.store);
    let events = event_sink("deploy", json, console());
    let result = use_case.execute_with_events(&options, events)?;

    if !json {
        println!("{}", output::render_deploy(&result));
    }
    Ok(())
}
