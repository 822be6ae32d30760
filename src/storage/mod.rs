//! Storage layer for seed-export
//!
//! Loads the two seed documents and persists the finished archive.

pub mod file_io;

pub use file_io::{read_json_required, write_atomic_with, write_bytes_atomic};

use std::path::Path;

use tracing::debug;

use crate::error::SeedError;
use crate::models::{Account, ChartOfAccounts, JournalTemplate, TemplateCatalog};

/// Everything read from the seed files
#[derive(Debug, Clone, Default)]
pub struct SeedData {
    pub accounts: Vec<Account>,
    pub templates: Vec<JournalTemplate>,
}

impl SeedData {
    /// Load both seed documents
    ///
    /// Fails on the first missing or malformed file.
    pub fn load(coa_path: &Path, templates_path: &Path) -> Result<Self, SeedError> {
        let chart: ChartOfAccounts = read_json_required(coa_path)?;
        debug!(
            path = %coa_path.display(),
            accounts = chart.accounts.len(),
            "loaded chart of accounts"
        );

        let catalog: TemplateCatalog = read_json_required(templates_path)?;
        debug!(
            path = %templates_path.display(),
            templates = catalog.templates.len(),
            "loaded journal templates"
        );

        Ok(Self {
            accounts: chart.accounts,
            templates: catalog.templates,
        })
    }
}
