//! Export module for seed-export
//!
//! Produces the import archive:
//! - CSV: escaping and per-entity encoders
//! - Layout: the fixed list of archive entries and their headers
//! - Manifest: the generated MANIFEST.md
//! - Archive: in-memory ZIP assembly and atomic write
//! - Inspect: reading an archive back for verification

pub mod archive;
pub mod csv;
pub mod inspect;
pub mod layout;
pub mod manifest;

pub use archive::ExportArchive;
pub use csv::{encode_accounts, encode_empty, encode_templates, escape_csv, CsvTable, EncodedTemplates};
pub use inspect::{inspect_archive, ArchiveReport, EntryReport};
pub use layout::{ArchiveEntry, EntryContent, LAYOUT};
pub use manifest::{Manifest, FORMAT_VERSION};
