//! Source file discovery.

use std::path::{Path, PathBuf};

use tracing::info;

use orders_model::RawRecord;

use crate::csv_source::read_orders_csv;
use crate::error::{IngestError, Result};

/// Lists all CSV files in a directory, sorted by filename.
pub fn list_csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|source| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("csv"))
            .unwrap_or(false);
        if is_csv {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Read every raw order record from `input`.
///
/// `input` is either a single delimited-text file or a directory holding a
/// set of them; a directory is read file by file in filename order. Any
/// read failure is fatal to the whole run.
pub fn read_order_records(input: &Path) -> Result<Vec<RawRecord>> {
    if input.is_file() {
        return read_orders_csv(input);
    }
    if !input.is_dir() {
        return Err(IngestError::InputNotFound {
            path: input.to_path_buf(),
        });
    }

    let files = list_csv_files(input)?;
    if files.is_empty() {
        return Err(IngestError::NoCsvFiles {
            path: input.to_path_buf(),
        });
    }

    let mut records = Vec::new();
    for file in &files {
        let mut file_records = read_orders_csv(file)?;
        info!(
            source_file = %file.display(),
            record_count = file_records.len(),
            "source file read"
        );
        records.append(&mut file_records);
    }
    Ok(records)
}
