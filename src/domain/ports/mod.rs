//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod bundler;
pub mod lockfile_repository;
pub mod object_store;
pub mod packager;
pub mod pipeline_events;

pub use bundler::Bundler;
pub use lockfile_repository::LockfileRepository;
pub use object_store::{ObjectStore, PutOutcome};
pub use packager::Packager;
pub use pipeline_events::{NoopEventSink, PipelineEvent, PipelineEventSink};
