//! MANIFEST.md generation
//!
//! The manifest is informational: the importer shows it to the user but
//! derives nothing from it.

use chrono::NaiveDateTime;

use crate::config::Settings;

/// Import format version written into the manifest
pub const FORMAT_VERSION: &str = "2.0";

/// Counts and timestamp recorded in the manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    /// Local time of the export
    pub exported_at: NaiveDateTime,
    pub account_count: usize,
    pub template_count: usize,
}

impl Manifest {
    pub fn new(exported_at: NaiveDateTime, account_count: usize, template_count: usize) -> Self {
        Self {
            exported_at,
            account_count,
            template_count,
        }
    }

    /// Render the manifest as Markdown
    pub fn render(&self, settings: &Settings) -> String {
        format!(
            "# Data Export Manifest

Export Date: {exported_at}
Application: {application}
Format Version: {version}

## Company Information
Name: {company}
NPWP: {npwp}

## Export Contents
- Chart of Accounts: {accounts} records
- Journal Templates: {templates} records
- Journal Entries: 0 records
- Transactions: 0 records
- Clients: 0 records
- Projects: 0 records
- Invoices: 0 records
- Employees: 0 records
- Payroll Runs: 0 records
- Users: 0 records
- Documents: 0 files
- Audit Logs: 0 records

## Notes
This is a seed data export containing only:
- Chart of Accounts ({coa_label})
- Journal Templates ({templates_label})

All other tables are empty placeholders.
",
            exported_at = self.exported_at.format("%Y-%m-%d %H:%M:%S"),
            application = settings.application_name,
            version = FORMAT_VERSION,
            company = settings.company_name,
            npwp = settings.company_npwp,
            accounts = self.account_count,
            templates = self.template_count,
            coa_label = settings.coa_label,
            templates_label = settings.templates_label,
        )
    }
}
