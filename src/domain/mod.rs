//! Domain Layer
//!
//! Build and packaging concepts without I/O.
//!
//! ## Structure
//!
//! - `entities/` - BuildRequest, ArchiveDescriptor, DeploymentManifest, DeployLock
//! - `value_objects/` - ContentHash, HandlerId, VersionLabel, ObjectKey
//! - `ports/` - Bundler, Packager, ObjectStore, lockfile and event interfaces

pub mod entities;
pub mod ports;
pub mod value_objects;
