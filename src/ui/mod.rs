//! Terminal and JSON rendering for the CLI

pub mod error;
pub mod json;
pub mod output;
