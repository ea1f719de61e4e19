//! Hive-style partitioned Parquet writing.
//!
//! One partition directory per distinct `status` value
//! (`status=<value>/part-00000.parquet`), records with no status in the
//! Hive default partition. A run is a full refresh: existing output at the
//! target location is replaced.

use std::collections::BTreeMap;
use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use polars::prelude::ParquetWriter;
use tracing::{debug, info};

use orders_model::CleanRecord;

use crate::frame::build_orders_frame;

/// Partition name for records whose status is absent.
pub const DEFAULT_PARTITION: &str = "__HIVE_DEFAULT_PARTITION__";

/// One written partition.
#[derive(Debug, Clone)]
pub struct PartitionSummary {
    /// The partition's status value (or [`DEFAULT_PARTITION`]).
    pub status: String,
    /// Records written to the partition.
    pub records: usize,
    /// Path of the written data file.
    pub path: PathBuf,
}

/// Escape a partition value for use as a directory name, the way Hive
/// escapes path segments: anything outside a safe set is percent-encoded.
fn escape_partition_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for byte in value.bytes() {
        let safe = byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b' ');
        if safe {
            escaped.push(byte as char);
        } else {
            escaped.push_str(&format!("%{byte:02X}"));
        }
    }
    escaped
}

/// Write the cleaned records under `out_dir`, partitioned by status.
///
/// Any existing output at `out_dir` is removed first (full refresh).
/// Returns one summary per written partition, ordered by status value.
pub fn write_partitioned_parquet(
    records: &[CleanRecord],
    out_dir: &Path,
) -> Result<Vec<PartitionSummary>> {
    if out_dir.exists() {
        std::fs::remove_dir_all(out_dir)
            .with_context(|| format!("clear output dir {}", out_dir.display()))?;
    }
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("create output dir {}", out_dir.display()))?;

    let mut partitions: BTreeMap<String, Vec<&CleanRecord>> = BTreeMap::new();
    for record in records {
        let status = record
            .status
            .as_deref()
            .filter(|status| !status.is_empty())
            .unwrap_or(DEFAULT_PARTITION);
        partitions.entry(status.to_string()).or_default().push(record);
    }

    let mut summaries = Vec::with_capacity(partitions.len());
    for (status, partition_records) in partitions {
        let dir = out_dir.join(format!("status={}", escape_partition_value(&status)));
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("create partition dir {}", dir.display()))?;
        let path = dir.join("part-00000.parquet");

        let owned: Vec<CleanRecord> = partition_records.into_iter().cloned().collect();
        let mut frame = build_orders_frame(&owned)
            .with_context(|| format!("build frame for status {status}"))?;
        let file = File::create(&path)
            .with_context(|| format!("create {}", path.display()))?;
        ParquetWriter::new(file)
            .finish(&mut frame)
            .with_context(|| format!("write {}", path.display()))?;

        debug!(
            status = %status,
            record_count = owned.len(),
            path = %path.display(),
            "partition written"
        );
        summaries.push(PartitionSummary {
            status,
            records: owned.len(),
            path,
        });
    }

    info!(
        partition_count = summaries.len(),
        record_count = records.len(),
        output_dir = %out_dir.display(),
        "parquet output complete"
    );
    Ok(summaries)
}
