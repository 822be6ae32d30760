//! Export settings for seed-export
//!
//! Holds the company identity and labels written into the manifest, and the
//! archive file name. Every field falls back to the stock Artivisi values.

use serde::Deserialize;

use super::paths::ExportPaths;
use crate::error::SeedError;

/// Settings that shape the generated archive
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Application name recorded in the manifest
    #[serde(default = "default_application_name")]
    pub application_name: String,

    /// Company name recorded in the manifest
    #[serde(default = "default_company_name")]
    pub company_name: String,

    /// Company tax number (NPWP) recorded in the manifest
    #[serde(default = "default_company_npwp")]
    pub company_npwp: String,

    /// Label describing the chart of accounts in the manifest notes
    #[serde(default = "default_coa_label")]
    pub coa_label: String,

    /// Label describing the journal templates in the manifest notes
    #[serde(default = "default_templates_label")]
    pub templates_label: String,

    /// Archive file name, relative to the base directory
    #[serde(default = "default_output_file")]
    pub output_file: String,
}

fn default_application_name() -> String {
    "Aplikasi Akunting".to_string()
}

fn default_company_name() -> String {
    "PT Artivisi Intermedia".to_string()
}

fn default_company_npwp() -> String {
    "-".to_string()
}

fn default_coa_label() -> String {
    "Artivisi IT Services COA v2.1".to_string()
}

fn default_templates_label() -> String {
    "Artivisi templates v2.1".to_string()
}

fn default_output_file() -> String {
    "artivisi-seed-data.zip".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            application_name: default_application_name(),
            company_name: default_company_name(),
            company_npwp: default_company_npwp(),
            coa_label: default_coa_label(),
            templates_label: default_templates_label(),
            output_file: default_output_file(),
        }
    }
}

impl Settings {
    /// Load settings from the base directory, or fall back to defaults if the
    /// settings file doesn't exist
    pub fn load_or_default(paths: &ExportPaths) -> Result<Self, SeedError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| SeedError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| SeedError::Config(format!("Failed to parse settings file: {}", e)))?;

        if settings.output_file.trim().is_empty() {
            return Err(SeedError::Config("outputFile must not be empty".into()));
        }

        Ok(settings)
    }
}
