use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::Utc;
use comfy_table::Table;
use tracing::{info, info_span};

use orders_clean::{DATE_FORMATS, RunStamp, run_pipeline};
use orders_ingest::read_order_records;
use orders_output::{write_cleanse_report_json, write_partitioned_parquet};

use crate::cli::RunArgs;
use crate::summary::apply_table_style;
use crate::types::RunResult;

pub fn run_formats() {
    let mut table = Table::new();
    table.set_header(vec!["Pattern", "Example"]);
    apply_table_style(&mut table);
    for format in &DATE_FORMATS {
        table.add_row(vec![format.pattern, format.example]);
    }
    println!("{table}");
    println!("Formats are tried in order; the first full match wins.");
}

pub fn run_clean(args: &RunArgs) -> Result<RunResult> {
    let run_id = args.run_id.clone().unwrap_or_else(|| derive_run_id(&args.input));
    let run_span = info_span!("run", run_id = %run_id);
    let _run_guard = run_span.enter();

    // One wall-clock instant for the whole run; every record shares it.
    let stamp = RunStamp::new(Utc::now(), args.pipeline_version.clone());
    let output_dir = args.output_dir.clone().unwrap_or_else(|| {
        if args.input.is_dir() {
            args.input.join("output")
        } else {
            args.input
                .parent()
                .map(|parent| parent.join("output"))
                .unwrap_or_else(|| PathBuf::from("output"))
        }
    });

    let ingest_start = Instant::now();
    let records = read_order_records(&args.input)
        .with_context(|| format!("read {}", args.input.display()))?;
    info!(
        run_id = %run_id,
        record_count = records.len(),
        duration_ms = ingest_start.elapsed().as_millis(),
        "ingest complete"
    );

    let outcome = run_pipeline(records, &stamp);

    let (partitions, report_path) = if args.dry_run {
        info!(run_id = %run_id, "output skipped (dry run)");
        (Vec::new(), None)
    } else {
        let output_start = Instant::now();
        let partitions = write_partitioned_parquet(&outcome.records, &output_dir)
            .with_context(|| format!("write {}", output_dir.display()))?;
        let report_path =
            write_cleanse_report_json(&output_dir, &outcome.report).context("write report")?;
        info!(
            run_id = %run_id,
            partition_count = partitions.len(),
            duration_ms = output_start.elapsed().as_millis(),
            "output complete"
        );
        (partitions, Some(report_path))
    };

    Ok(RunResult {
        run_id,
        output_dir,
        dry_run: args.dry_run,
        report: outcome.report,
        partitions,
        report_path,
    })
}

/// Derive a run identifier from the input's file name.
fn derive_run_id(input: &Path) -> String {
    input
        .file_stem()
        .and_then(|name| name.to_str())
        .unwrap_or("orders")
        .to_string()
}
