//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `bundler/` - esbuild invocation
//! - `packager/` - deterministic zip packaging
//! - `store/` - directory-backed object store
//! - `repositories/` - deploy lockfile persistence
//! - `events/` - console and NDJSON event sinks
//! - `fs/` - shared file helpers

pub mod bundler;
pub mod events;
pub mod fs;
pub mod packager;
pub mod repositories;
pub mod store;

pub use bundler::EsbuildBundler;
pub use events::{ConsoleEventSink, JsonEventSink};
pub use packager::{hash_directory, ZipPackager};
pub use repositories::TomlLockfileRepository;
pub use store::LocalObjectStore;
