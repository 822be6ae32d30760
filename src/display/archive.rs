//! Archive report display formatting
//!
//! Formats an inspected archive as a table for terminal output.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::export::{ArchiveReport, EntryReport};

#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "Entry")]
    name: String,
    #[tabled(rename = "Rows")]
    rows: String,
    #[tabled(rename = "Size")]
    size: u64,
    #[tabled(rename = "Packed")]
    packed: u64,
}

impl From<&EntryReport> for EntryRow {
    fn from(entry: &EntryReport) -> Self {
        Self {
            name: entry.name.clone(),
            rows: entry
                .rows
                .map(|r| r.to_string())
                .unwrap_or_else(|| "-".to_string()),
            size: entry.size,
            packed: entry.compressed_size,
        }
    }
}

/// Format an archive report as a table, followed by any layout problems
pub fn format_archive_report(report: &ArchiveReport) -> String {
    if report.entries.is_empty() {
        return "Archive is empty.".to_string();
    }

    let rows: Vec<EntryRow> = report.entries.iter().map(EntryRow::from).collect();
    let mut output = Table::new(rows).with(Style::psql()).to_string();

    for name in &report.missing {
        output.push_str(&format!("\nmissing: {}", name));
    }
    for name in &report.unexpected {
        output.push_str(&format!("\nunexpected: {}", name));
    }

    output
}
