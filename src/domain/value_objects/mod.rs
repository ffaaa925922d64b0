//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod handler;
mod hash;
mod version;

pub use handler::HandlerId;
pub use hash::{ContentHash, TreeHasher};
pub use version::{ObjectKey, VersionLabel};
