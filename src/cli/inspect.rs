//! The inspect command: report what an archive contains

use std::path::PathBuf;

use crate::config::{ExportPaths, Settings};
use crate::display::format_archive_report;
use crate::error::{SeedError, SeedResult};
use crate::export::inspect_archive;

/// Handle the inspect command
///
/// Defaults to the archive a plain build would write. Fails when the archive
/// doesn't match the import layout, after printing the listing.
pub fn handle_inspect(
    paths: &ExportPaths,
    settings: &Settings,
    archive: Option<PathBuf>,
) -> SeedResult<()> {
    let archive = archive.unwrap_or_else(|| PathBuf::from(&settings.output_file));
    let report = inspect_archive(&paths.resolve(&archive))?;

    println!("Archive: {}", archive.display());
    println!();
    println!("{}", format_archive_report(&report));

    if report.layout_matches {
        println!();
        println!("Layout OK: {} entries", report.entries.len());
        Ok(())
    } else {
        Err(SeedError::Archive(format!(
            "{} does not match the import layout ({} missing, {} unexpected)",
            archive.display(),
            report.missing.len(),
            report.unexpected.len()
        )))
    }
}
