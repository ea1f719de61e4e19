//! Cleanse report persistence.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use orders_clean::CleanseReport;

/// Write the run's drop-count report as JSON next to the partitions.
///
/// Returns the path of the written file.
pub fn write_cleanse_report_json(out_dir: &Path, report: &CleanseReport) -> Result<PathBuf> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("create output dir {}", out_dir.display()))?;
    let path = out_dir.join("cleanse_report.json");
    let payload = serde_json::to_string_pretty(report).context("serialize cleanse report")?;
    std::fs::write(&path, payload).with_context(|| format!("write {}", path.display()))?;
    Ok(path)
}
