//! Pipeline Event Port
//!
//! Observable interface for the bundle → package → deploy pipeline.
//! Enables progress reporting and JSON event streams.

use std::path::PathBuf;

/// Event emitted while the pipeline runs
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineEvent {
    /// Pipeline started
    Started {
        working_dir: PathBuf,
        version: String,
    },

    /// Bundler finished
    Bundled { output_dir: PathBuf },

    /// Build output packaged
    Packaged {
        file_name: String,
        hash: String,
        content_path: PathBuf,
    },

    /// Remote key computed
    Keyed { object_key: String },

    /// Deployment manifest written
    ManifestWritten { path: PathBuf },

    /// Archive published to an object store
    Published { location: String, uploaded: bool },

    /// Pipeline completed
    Completed {
        object_key: String,
        hash: String,
        unchanged: bool,
        dry_run: bool,
    },
}

/// Trait for receiving pipeline events
///
/// Implementations:
/// - ConsoleEventSink: human-readable progress on stderr
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: silent operation
pub trait PipelineEventSink {
    fn on_event(&self, event: PipelineEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl PipelineEventSink for NoopEventSink {
    fn on_event(&self, _event: PipelineEvent) {}
}
