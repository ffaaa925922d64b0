//! Subcommand implementations

pub mod bundle;
pub mod deploy;
pub mod key;
pub mod package;
mod project;

pub use bundle::cmd_bundle;
pub use deploy::cmd_deploy;
pub use key::cmd_key;
pub use package::cmd_package;

use std::sync::Arc;

use lambdapack::domain::ports::{NoopEventSink, PipelineEventSink};
use lambdapack::infrastructure::{ConsoleEventSink, JsonEventSink};

/// NDJSON events on stdout for `--json`; otherwise `fallback`.
fn event_sink(
    command: &'static str,
    json: bool,
    fallback: Arc<dyn PipelineEventSink>,
) -> Arc<dyn PipelineEventSink> {
    if json {
        Arc::new(JsonEventSink::stdout(command))
    } else {
        fallback
    }
}

fn quiet() -> Arc<dyn PipelineEventSink> {
    Arc::new(NoopEventSink)
}

fn console() -> Arc<dyn PipelineEventSink> {
    Arc::new(ConsoleEventSink::stderr())
}
