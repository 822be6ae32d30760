//! File I/O utilities with atomic writes
//!
//! Reads the JSON seed documents and writes the finished archive without
//! ever leaving a half-written file at the destination.

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::error::SeedError;

/// Read JSON from a file, returning an error if the file doesn't exist
pub fn read_json_required<T, P>(path: P) -> Result<T, SeedError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Err(SeedError::missing_input(path));
    }

    let file = File::open(path)
        .map_err(|e| SeedError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .map_err(|e| SeedError::Json(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Write bytes to a file atomically (write to temp, then rename)
///
/// The destination is either fully replaced or left untouched.
pub fn write_bytes_atomic<P: AsRef<Path>>(path: P, bytes: &[u8]) -> Result<(), SeedError> {
    write_atomic_with(path, |writer| writer.write_all(bytes))
}

/// Stream content into a temp sibling of `path`, then rename it into place
///
/// Any failure after the temp file is created removes it again, so neither a
/// partial destination nor a stale `.tmp` file is left behind.
pub fn write_atomic_with<P, F>(path: P, fill: F) -> Result<(), SeedError>
where
    P: AsRef<Path>,
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            SeedError::Io(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Same directory as the target so the rename stays on one filesystem
    let temp_path = temp_path_for(path);

    let file = File::create(&temp_path)
        .map_err(|e| SeedError::Io(format!("Failed to create temp file: {}", e)))?;

    let result = fill_and_sync(file, fill).and_then(|()| {
        fs::rename(&temp_path, path).map_err(|e| {
            SeedError::Io(format!(
                "Failed to move archive into place at {}: {}",
                path.display(),
                e
            ))
        })
    });

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }

    result
}

fn fill_and_sync<F>(file: File, fill: F) -> Result<(), SeedError>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    let mut writer = BufWriter::new(file);
    fill(&mut writer).map_err(|e| SeedError::Io(format!("Failed to write data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| SeedError::Io(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| SeedError::Io(format!("Failed to sync data: {}", e)))
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
