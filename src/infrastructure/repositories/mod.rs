//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod lockfile;

pub use lockfile::TomlLockfileRepository;
