//! File System Helpers
//!
//! Local disk operations used by the infrastructure adapters.

mod local;

pub use local::{atomic_write, hash_file, list_files, remove_dir_if_exists, TreeEntry};
