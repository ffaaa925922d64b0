//! JSON Event Sink
//!
//! Outputs pipeline events as NDJSON for CI/automation consumption.

use crate::domain::ports::{PipelineEvent, PipelineEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events
pub struct JsonEventSink {
    command: &'static str,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout(command: &'static str) -> Self {
        Self::with_writer(command, io::stdout())
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(command: &'static str, writer: W) -> Self {
        Self {
            command,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl PipelineEventSink for JsonEventSink {
    fn on_event(&self, event: PipelineEvent) {
        let command = self.command;
        let json = match event {
            PipelineEvent::Started {
                working_dir,
                version,
            } => serde_json::json!({
                "event": "start",
                "command": command,
                "working_dir": working_dir.display().to_string(),
                "version": version,
            }),

            PipelineEvent::Bundled { output_dir } => serde_json::json!({
                "event": "bundled",
                "command": command,
                "output_dir": output_dir.display().to_string(),
            }),

            PipelineEvent::Packaged {
                file_name,
                hash,
                content_path,
            } => serde_json::json!({
                "event": "packaged",
                "command": command,
                "file_name": file_name,
                "hash": hash,
                "content_path": content_path.display().to_string(),
            }),

            PipelineEvent::Keyed { object_key } => serde_json::json!({
                "event": "keyed",
                "command": command,
                "object_key": object_key,
            }),

            PipelineEvent::ManifestWritten { path } => serde_json::json!({
                "event": "manifest_written",
                "command": command,
                "path": path.display().to_string(),
            }),

            PipelineEvent::Published { location, uploaded } => serde_json::json!({
                "event": "published",
                "command": command,
                "location": location,
                "uploaded": uploaded,
            }),

            PipelineEvent::Completed {
                object_key,
                hash,
                unchanged,
                dry_run,
            } => serde_json::json!({
                "event": "complete",
                "command": command,
                "status": "success",
                "object_key": object_key,
                "hash": hash,
                "unchanged": unchanged,
                "dry_run": dry_run,
            }),
        };

        self.write_event(json);
    }
}
