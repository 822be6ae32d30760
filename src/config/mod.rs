//! Configuration module for seed-export
//!
//! This module provides configuration management including:
//! - Base directory and seed file path resolution
//! - Optional export settings (company identity, manifest labels)

pub mod paths;
pub mod settings;

pub use paths::ExportPaths;
pub use settings::Settings;
