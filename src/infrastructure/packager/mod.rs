//! Packager implementations

mod zip;

pub use self::zip::{hash_directory, ZipPackager};
