use std::path::PathBuf;

use orders_clean::CleanseReport;
use orders_output::PartitionSummary;

#[derive(Debug)]
pub struct RunResult {
    pub run_id: String,
    pub output_dir: PathBuf,
    pub dry_run: bool,
    pub report: CleanseReport,
    pub partitions: Vec<PartitionSummary>,
    pub report_path: Option<PathBuf>,
}
