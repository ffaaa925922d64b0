//! lambdapack CLI - bundle, package and publish serverless functions
//!
//! Usage: lambdapack <COMMAND>
//!
//! Commands:
//!   bundle   Run the bundler and print the output directory
//!   package  Bundle and package into a content-addressed archive
//!   key      Package and print the versioned object key
//!   deploy   Bundle, package, write the manifest and record the deploy

mod cli;
mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let json = cli.json;
    let command = command_name(&cli.command);
    if let Err(err) = run(cli) {
        if json {
            let _ = ui::json::emit(serde_json::json!({
                "event": "error",
                "command": command,
                "message": format!("{:#}", err),
            }));
        }
        eprintln!("{}", ui::error::format_error(&err));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Bundle { path } => commands::cmd_bundle(&path, cli.json),
        Commands::Package { path, dir } => commands::cmd_package(&path, dir, cli.json),
        Commands::Key {
            path,
            version_label,
        } => commands::cmd_key(&path, &version_label, cli.json),
        Commands::Deploy {
            path,
            version_label,
            handler,
            store,
            dry_run,
        } => commands::cmd_deploy(
            commands::deploy::DeployArgs {
                path,
                version: version_label,
                handler,
                store,
                dry_run,
            },
            cli.json,
        ),
    }
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Bundle { .. } => "bundle",
        Commands::Package { .. } => "package",
        Commands::Key { .. } => "key",
        Commands::Deploy { .. } => "deploy",
    }
}

/// `RUST_LOG` wins; otherwise `-v` raises the level from `warn`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
