//! Display formatting for terminal output

pub mod archive;

pub use archive::format_archive_report;
