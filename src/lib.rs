//! seed-export - Build accounting import archives from seed files
//!
//! This library converts a chart-of-accounts JSON file and a journal-template
//! JSON file into the ZIP layout the accounting application imports through
//! Settings > Import Data.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Base directory, seed paths and export settings
//! - `error`: Custom error types
//! - `models`: Seed document types (accounts, templates)
//! - `storage`: JSON loading and atomic file writes
//! - `services`: Seed data integrity checks
//! - `export`: CSV encoding, archive layout, manifest, ZIP assembly
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use seed_export::config::{ExportPaths, Settings};
//! use seed_export::export::ExportArchive;
//! use seed_export::storage::SeedData;
//!
//! let paths = ExportPaths::new()?;
//! let settings = Settings::load_or_default(&paths)?;
//! let seed = SeedData::load(&paths.coa_file(), &paths.templates_file())?;
//! let archive = ExportArchive::build(&seed, &settings, chrono::Local::now().naive_local())?;
//! archive.write_to(&paths.resolve(&settings.output_file))?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{SeedError, SeedResult};
