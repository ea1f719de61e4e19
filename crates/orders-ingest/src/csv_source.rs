//! CSV reading for raw order exports.
//!
//! The header row defines which of the known order fields a file carries.
//! Every value is read as raw text; type inference is the pipeline's job,
//! not the reader's. A known column missing from a file yields `None` for
//! that field on every row of the file.

use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use orders_model::{FIELD_NAMES, RawRecord};

use crate::error::{IngestError, Result};

/// Strip a UTF-8 BOM and surrounding whitespace from a header cell.
fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').trim().to_lowercase()
}

/// Match a header cell to one of the known order fields.
fn match_field(header: &str) -> Option<&'static str> {
    FIELD_NAMES
        .iter()
        .find(|name| header.eq_ignore_ascii_case(name))
        .copied()
}

/// Read one delimited-text export into raw order records.
///
/// Values are kept verbatim, including surrounding whitespace and literal
/// null sentinels; the cleansing pipeline owns all rewriting. Columns whose
/// header matches no known field are ignored.
pub fn read_orders_csv(path: &Path) -> Result<Vec<RawRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|source| IngestError::CsvRead {
            path: path.to_path_buf(),
            source,
        })?;

    let headers = reader
        .headers()
        .map_err(|source| IngestError::CsvRead {
            path: path.to_path_buf(),
            source,
        })?
        .clone();
    if headers.is_empty() {
        return Err(IngestError::MissingHeader {
            path: path.to_path_buf(),
        });
    }

    // Column position -> field name, for the columns this file carries.
    let mut columns: Vec<Option<&'static str>> = Vec::with_capacity(headers.len());
    for header in headers.iter() {
        let normalized = normalize_header(header);
        let field = match_field(&normalized);
        if field.is_none() && !normalized.is_empty() {
            debug!(source_file = %path.display(), column = %normalized, "ignoring unknown column");
        }
        columns.push(field);
    }

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|source| IngestError::CsvRead {
            path: path.to_path_buf(),
            source,
        })?;
        if row.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        let mut record = RawRecord::default();
        for (idx, field) in columns.iter().enumerate() {
            let Some(field) = field else {
                continue;
            };
            let value = row.get(idx).map(|value| value.to_string());
            record.set_field(field, value);
        }
        records.push(record);
    }

    debug!(
        source_file = %path.display(),
        record_count = records.len(),
        "csv read"
    );
    Ok(records)
}
