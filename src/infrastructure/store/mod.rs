//! Object store implementations

mod local;

pub use local::LocalObjectStore;
