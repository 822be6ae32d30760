//! Path management for seed-export
//!
//! Resolves where the seed files are read from and where the archive lands.
//!
//! ## Base Directory Resolution Order
//!
//! 1. `SEED_EXPORT_DIR` environment variable (if set)
//! 2. The current working directory

use std::path::{Path, PathBuf};

use crate::error::SeedError;

/// Relative path of the chart-of-accounts seed file
pub const COA_FILE: &str = "templates/coa.json";

/// Relative path of the journal-templates seed file
pub const TEMPLATES_FILE: &str = "templates/journal-templates.json";

/// Name of the optional settings file in the base directory
pub const SETTINGS_FILE: &str = "seed-export.json";

/// Manages all paths used by seed-export
#[derive(Debug, Clone)]
pub struct ExportPaths {
    /// Directory the relative seed paths are resolved against
    base_dir: PathBuf,
}

impl ExportPaths {
    /// Create a new ExportPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn new() -> Result<Self, SeedError> {
        let base_dir = if let Ok(custom) = std::env::var("SEED_EXPORT_DIR") {
            PathBuf::from(custom)
        } else {
            std::env::current_dir().map_err(|e| {
                SeedError::Config(format!("Could not determine current directory: {}", e))
            })?
        };

        Ok(Self { base_dir })
    }

    /// Create ExportPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to coa.json
    pub fn coa_file(&self) -> PathBuf {
        self.base_dir.join(COA_FILE)
    }

    /// Get the path to journal-templates.json
    pub fn templates_file(&self) -> PathBuf {
        self.base_dir.join(TEMPLATES_FILE)
    }

    /// Get the path to the optional settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join(SETTINGS_FILE)
    }

    /// Resolve a user-supplied path against the base directory
    ///
    /// Absolute paths are returned unchanged.
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }
}
