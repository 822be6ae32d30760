//! Archive inspection
//!
//! Reads an import archive back and counts the data rows in each CSV entry
//! with a real CSV parser, so quoting mistakes surface as parse errors.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

use crate::error::{SeedError, SeedResult};

use super::layout::entry_names;

/// One entry as found in the archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryReport {
    pub name: String,
    /// Data rows excluding the header; `None` for non-CSV entries
    pub rows: Option<usize>,
    pub compressed_size: u64,
    pub size: u64,
}

/// Result of inspecting an archive
#[derive(Debug, Clone, Default)]
pub struct ArchiveReport {
    pub entries: Vec<EntryReport>,
    /// Expected entries absent from the archive
    pub missing: Vec<String>,
    /// Entries the import format doesn't know about
    pub unexpected: Vec<String>,
    /// Whether names and order match the import layout exactly
    pub layout_matches: bool,
}

impl ArchiveReport {
    /// Data rows of a named entry, if present and CSV
    pub fn rows_of(&self, name: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .and_then(|e| e.rows)
    }
}

/// Inspect an archive on disk
pub fn inspect_archive(path: &Path) -> SeedResult<ArchiveReport> {
    if !path.exists() {
        return Err(SeedError::missing_input(path));
    }

    let file = File::open(path)
        .map_err(|e| SeedError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

    inspect_reader(BufReader::new(file))
}

/// Inspect an archive from any seekable reader
pub fn inspect_reader<R: Read + Seek>(reader: R) -> SeedResult<ArchiveReport> {
    let mut archive = zip::ZipArchive::new(reader)?;
    let mut entries = Vec::with_capacity(archive.len());

    for idx in 0..archive.len() {
        let mut file = archive.by_index(idx)?;
        let name = file.name().to_string();
        let size = file.size();
        let compressed_size = file.compressed_size();

        // Streamed: the declared size comes from the archive and isn't trusted
        let rows = if name.ends_with(".csv") {
            Some(count_records(&mut file).map_err(|e| {
                SeedError::Archive(format!("Malformed CSV in {}: {}", name, e))
            })?)
        } else {
            None
        };

        entries.push(EntryReport {
            name,
            rows,
            compressed_size,
            size,
        });
    }

    let found: HashSet<&str> = entries.iter().map(|e| e.name.as_str()).collect();
    let expected: HashSet<&str> = entry_names().collect();

    let missing = entry_names()
        .filter(|n| !found.contains(n))
        .map(str::to_string)
        .collect();
    let unexpected = entries
        .iter()
        .filter(|e| !expected.contains(e.name.as_str()))
        .map(|e| e.name.clone())
        .collect();
    let layout_matches = entries.iter().map(|e| e.name.as_str()).eq(entry_names());

    Ok(ArchiveReport {
        entries,
        missing,
        unexpected,
        layout_matches,
    })
}

fn count_records<R: Read>(contents: R) -> Result<usize, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(contents);

    let mut count = 0;
    for record in reader.records() {
        record?;
        count += 1;
    }
    Ok(count)
}
