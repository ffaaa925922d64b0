use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// lambdapack - bundle, package and publish serverless functions
#[derive(Parser, Debug)]
#[command(name = "lambdapack")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the bundler and print the output directory
    Bundle {
        /// Function source directory
        #[arg(short, long, default_value = ".")]
        path: PathBuf,
    },

    /// Bundle and package into a content-addressed archive
    Package {
        /// Function source directory
        #[arg(short, long, default_value = ".")]
        path: PathBuf,

        /// Package this directory instead of running the bundler
        #[arg(long)]
        dir: Option<PathBuf>,
    },

    /// Package and print the versioned object key
    Key {
        /// Function source directory
        #[arg(short, long, default_value = ".")]
        path: PathBuf,

        /// Version label that namespaces the key
        #[arg(long = "version")]
        version_label: String,
    },

    /// Bundle, package, write the deployment manifest and record the deploy
    Deploy {
        /// Function source directory
        #[arg(short, long, default_value = ".")]
        path: PathBuf,

        /// Version label (overrides config and LAMBDAPACK_VERSION)
        #[arg(long = "version")]
        version_label: Option<String>,

        /// Handler identifier, e.g. index.handler
        #[arg(long)]
        handler: Option<String>,

        /// Publish the archive into this local object store directory
        #[arg(long)]
        store: Option<PathBuf>,

        /// Compute key and manifest without writing them
        #[arg(long)]
        dry_run: bool,
    },
}
