//! Custom error types for seed-export
//!
//! This module defines the error hierarchy for the exporter using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for seed-export operations
#[derive(Error, Debug)]
pub enum SeedError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Seed data integrity findings (strict mode only)
    #[error("Validation error: {0}")]
    Validation(String),

    /// ZIP container errors
    #[error("Archive error: {0}")]
    Archive(String),

    /// Input file is missing
    #[error("Seed file not found: {}", .path.display())]
    MissingInput { path: std::path::PathBuf },
}

impl SeedError {
    /// Create a "missing input" error for the given path
    pub fn missing_input(path: impl Into<std::path::PathBuf>) -> Self {
        Self::MissingInput { path: path.into() }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for SeedError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SeedError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<zip::result::ZipError> for SeedError {
    fn from(err: zip::result::ZipError) -> Self {
        Self::Archive(err.to_string())
    }
}

impl From<csv::Error> for SeedError {
    fn from(err: csv::Error) -> Self {
        Self::Archive(format!("CSV parse failed: {}", err))
    }
}

/// Result type alias for seed-export operations
pub type SeedResult<T> = Result<T, SeedError>;
