//! Archive builder
//!
//! Assembles every entry of the import archive in memory, then writes the
//! finished ZIP to disk in one atomic step.

use std::io::{Cursor, Write};
use std::path::Path;

use chrono::NaiveDateTime;
use tracing::{debug, info};
use zip::write::{SimpleFileOptions, ZipWriter};
use zip::CompressionMethod;

use crate::config::Settings;
use crate::error::{SeedError, SeedResult};
use crate::storage::{write_bytes_atomic, SeedData};

use super::csv::{encode_accounts, encode_empty, encode_templates};
use super::layout::{EntryContent, LAYOUT};
use super::manifest::Manifest;

/// A fully assembled archive held in memory
#[derive(Debug, Clone)]
pub struct ExportArchive {
    bytes: Vec<u8>,
    entries: Vec<String>,
    pub account_count: usize,
    pub template_count: usize,
}

impl ExportArchive {
    /// Build the archive from seed data
    pub fn build(
        seed: &SeedData,
        settings: &Settings,
        exported_at: NaiveDateTime,
    ) -> SeedResult<Self> {
        let accounts = encode_accounts(&seed.accounts);
        let templates = encode_templates(&seed.templates);
        let manifest = Manifest::new(exported_at, seed.accounts.len(), seed.templates.len());

        let mut zw = ZipWriter::new(Cursor::new(Vec::new()));
        let opts = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        let mut entries = Vec::with_capacity(LAYOUT.len());

        for entry in LAYOUT.iter() {
            let text = match entry.content {
                EntryContent::Manifest => manifest.render(settings),
                EntryContent::Accounts => accounts.as_str().to_string(),
                EntryContent::Templates => templates.templates.as_str().to_string(),
                EntryContent::TemplateLines => templates.lines.as_str().to_string(),
                EntryContent::TemplateTags => templates.tags.as_str().to_string(),
                EntryContent::Placeholder(header) => encode_empty(header).into_string(),
            };

            zw.start_file(entry.name, opts)?;
            zw.write_all(text.as_bytes()).map_err(|e| {
                SeedError::Archive(format!("Failed to write entry {}: {}", entry.name, e))
            })?;
            debug!(entry = entry.name, bytes = text.len(), "added archive entry");
            entries.push(entry.name.to_string());
        }

        let bytes = zw.finish()?.into_inner();

        Ok(Self {
            bytes,
            entries,
            account_count: seed.accounts.len(),
            template_count: seed.templates.len(),
        })
    }

    /// Entry names in archive order
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Raw ZIP bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Write the archive to `path`, replacing any existing file
    pub fn write_to(&self, path: &Path) -> SeedResult<()> {
        write_bytes_atomic(path, &self.bytes)?;
        info!(
            path = %path.display(),
            bytes = self.bytes.len(),
            entries = self.entries.len(),
            "wrote import archive"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::layout::entry_names;
    use crate::models::{Account, AccountType, JournalTemplate, Position, TemplateLine};
    use chrono::NaiveDate;
    use std::io::Read;
    use tempfile::TempDir;

    fn sample_seed() -> SeedData {
        SeedData {
            accounts: vec![
                Account::new("1000", "Cash, Bank", AccountType::Asset),
                Account::new("5100", "Rent Expense", AccountType::Expense).with_parent("5000"),
            ],
            templates: vec![JournalTemplate::new("Rent")
                .with_line(TemplateLine::new("5100", Position::Debit))
                .with_line(TemplateLine::new("1000", Position::Credit))
                .with_tag("monthly")],
        }
    }

    fn exported_at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn read_entry(bytes: &[u8], name: &str) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut file = archive.by_name(name).unwrap();
        let mut text = String::new();
        file.read_to_string(&mut text).unwrap();
        text
    }

    #[test]
    fn test_archive_contains_exact_layout() {
        let archive = ExportArchive::build(&sample_seed(), &Settings::default(), exported_at()).unwrap();

        let mut zip = zip::ZipArchive::new(Cursor::new(archive.as_bytes())).unwrap();
        let names: Vec<String> = (0..zip.len())
            .map(|i| zip.by_index(i).unwrap().name().to_string())
            .collect();

        assert_eq!(names.len(), 35);
        assert_eq!(names, entry_names().collect::<Vec<_>>());
        assert_eq!(archive.entries(), names.as_slice());
    }

    #[test]
    fn test_entries_are_deflated() {
        let archive = ExportArchive::build(&sample_seed(), &Settings::default(), exported_at()).unwrap();
        let mut zip = zip::ZipArchive::new(Cursor::new(archive.as_bytes())).unwrap();

        for i in 0..zip.len() {
            assert_eq!(zip.by_index(i).unwrap().compression(), CompressionMethod::Deflated);
        }
    }

    #[test]
    fn test_archive_entry_contents() {
        let archive = ExportArchive::build(&sample_seed(), &Settings::default(), exported_at()).unwrap();
        let bytes = archive.as_bytes();

        let coa = read_entry(bytes, "02_chart_of_accounts.csv");
        assert_eq!(coa.lines().count(), 3);
        assert!(coa.contains("1000,\"Cash, Bank\",ASSET,,DEBIT,true,\n"));

        let tags = read_entry(bytes, "06_journal_template_tags.csv");
        assert_eq!(tags, "template_name,tag\nRent,monthly\n");

        let manifest = read_entry(bytes, "MANIFEST.md");
        assert!(manifest.contains("Export Date: 2025-03-01 12:00:00"));
        assert!(manifest.contains("- Chart of Accounts: 2 records"));
        assert!(manifest.contains("- Journal Templates: 1 records"));
    }

    #[test]
    fn test_placeholders_are_header_only() {
        let archive = ExportArchive::build(&sample_seed(), &Settings::default(), exported_at()).unwrap();

        for (name, header) in crate::export::layout::placeholders() {
            let text = read_entry(archive.as_bytes(), name);
            assert_eq!(text, format!("{}\n", header), "{}", name);
        }
    }

    #[test]
    fn test_empty_seed_still_produces_full_layout() {
        let archive = ExportArchive::build(&SeedData::default(), &Settings::default(), exported_at()).unwrap();

        assert_eq!(archive.entries().len(), 35);
        assert_eq!(
            read_entry(archive.as_bytes(), "05_journal_template_lines.csv").lines().count(),
            1
        );
    }

    #[test]
    fn test_write_to_overwrites_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("artivisi-seed-data.zip");
        std::fs::write(&path, b"stale").unwrap();

        let archive = ExportArchive::build(&sample_seed(), &Settings::default(), exported_at()).unwrap();
        archive.write_to(&path).unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), archive.as_bytes());
    }
}
