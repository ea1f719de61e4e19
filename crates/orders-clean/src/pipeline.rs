//! The cleansing pipeline: stages wired strictly forward.

use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info, info_span};

use orders_model::{CleanRecord, RawRecord};

use crate::audit::{RunStamp, stamp_record};
use crate::datetime::normalize_order_date;
use crate::dedupe::dedupe_records;
use crate::derive::cast_record;
use crate::normalize::normalize_record;
use crate::validate::{DropReason, validate_record};

/// Per-rule rejection counts plus stage totals for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CleanseReport {
    pub input_count: usize,
    pub duplicates_removed: usize,
    pub dropped_missing_mandatory: usize,
    pub dropped_invalid_email: usize,
    pub dropped_invalid_quantity: usize,
    pub dropped_invalid_unit_price: usize,
    pub output_count: usize,
}

impl CleanseReport {
    fn count_drop(&mut self, reason: DropReason) {
        match reason {
            DropReason::MissingMandatory => self.dropped_missing_mandatory += 1,
            DropReason::InvalidEmail => self.dropped_invalid_email += 1,
            DropReason::InvalidQuantity => self.dropped_invalid_quantity += 1,
            DropReason::InvalidUnitPrice => self.dropped_invalid_unit_price += 1,
        }
    }

    /// Total records excluded by validation (duplicates not included).
    pub fn dropped_total(&self) -> usize {
        self.dropped_missing_mandatory
            + self.dropped_invalid_email
            + self.dropped_invalid_quantity
            + self.dropped_invalid_unit_price
    }
}

/// Result of one pipeline run.
#[derive(Debug)]
pub struct PipelineOutcome {
    /// The cleaned, typed, stamped records.
    pub records: Vec<CleanRecord>,
    /// What happened to everything else.
    pub report: CleanseReport,
}

/// Run the full cleansing pipeline over a raw record collection.
///
/// Pure given its inputs: the same records and the same stamp produce the
/// same output, so a run can be safely repeated.
pub fn run_pipeline(records: Vec<RawRecord>, stamp: &RunStamp) -> PipelineOutcome {
    let run_start = Instant::now();
    let mut report = CleanseReport {
        input_count: records.len(),
        ..CleanseReport::default()
    };

    let deduped = info_span!("dedupe").in_scope(|| {
        let start = Instant::now();
        let result = dedupe_records(records);
        debug!(
            removed = result.removed,
            record_count = result.records.len(),
            duration_ms = start.elapsed().as_millis(),
            "dedupe complete"
        );
        result
    });
    report.duplicates_removed = deduped.removed;

    let normalized: Vec<RawRecord> = info_span!("normalize").in_scope(|| {
        let start = Instant::now();
        let normalized: Vec<RawRecord> = deduped
            .records
            .into_iter()
            .map(normalize_record)
            .map(normalize_order_date)
            .collect();
        debug!(
            record_count = normalized.len(),
            duration_ms = start.elapsed().as_millis(),
            "normalize complete"
        );
        normalized
    });

    let records = info_span!("validate").in_scope(|| {
        let start = Instant::now();
        let mut cleaned = Vec::with_capacity(normalized.len());
        for record in normalized {
            match validate_record(&record) {
                Err(reason) => report.count_drop(reason),
                // Validation guarantees the cast succeeds.
                Ok(()) => cleaned.extend(cast_record(record).map(|typed| stamp_record(typed, stamp))),
            }
        }
        debug!(
            dropped = report.dropped_total(),
            record_count = cleaned.len(),
            duration_ms = start.elapsed().as_millis(),
            "validate complete"
        );
        cleaned
    });
    report.output_count = records.len();

    info!(
        input_count = report.input_count,
        duplicates_removed = report.duplicates_removed,
        dropped = report.dropped_total(),
        output_count = report.output_count,
        duration_ms = run_start.elapsed().as_millis(),
        "cleanse complete"
    );

    PipelineOutcome { records, report }
}
