//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the export pipeline.

pub mod build;
pub mod inspect;

pub use build::{handle_build, BuildArgs, BuildSummary};
pub use inspect::handle_inspect;
