//! Bundler implementations

mod esbuild;

pub use esbuild::EsbuildBundler;
