//! Run-wide audit stamping.
//!
//! Every record of a run carries the same two audit values: the UTC
//! instant the run began and the pipeline version. Both are injected once
//! at run start and never mutated, so a run is reproducible given the same
//! input and the same stamp.

use chrono::{DateTime, Utc};

use orders_model::CleanRecord;

use crate::derive::TypedOrder;

/// Version tag attached to every cleaned record unless overridden.
pub const DEFAULT_PIPELINE_VERSION: &str = "1.0.0";

/// Timestamp format for the cleaned_at column.
pub const CLEANED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The audit values shared by every record of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunStamp {
    /// Run start, formatted `YYYY-MM-DD HH:MM:SS` in UTC.
    pub cleaned_at: String,
    /// Fixed version tag for the run.
    pub pipeline_version: String,
}

impl RunStamp {
    /// Build a stamp from the run-start instant and a version string.
    /// Tests inject a fixed instant here to pin the output.
    pub fn new(run_start: DateTime<Utc>, pipeline_version: impl Into<String>) -> Self {
        Self {
            cleaned_at: run_start.format(CLEANED_AT_FORMAT).to_string(),
            pipeline_version: pipeline_version.into(),
        }
    }
}

/// Attach the run's audit values to a typed record. Purely additive.
#[must_use]
pub fn stamp_record(order: TypedOrder, stamp: &RunStamp) -> CleanRecord {
    CleanRecord {
        order_id: order.order_id,
        customer_name: order.customer_name,
        email: order.email,
        country: order.country,
        status: order.status,
        product: order.product,
        order_date: order.order_date,
        quantity: order.quantity,
        unit_price: order.unit_price,
        order_total: order.order_total,
        cleaned_at: stamp.cleaned_at.clone(),
        pipeline_version: stamp.pipeline_version.clone(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_stamp_format() {
        let run_start = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 45).unwrap();
        let stamp = RunStamp::new(run_start, DEFAULT_PIPELINE_VERSION);
        assert_eq!(stamp.cleaned_at, "2024-03-01 12:30:45");
        assert_eq!(stamp.pipeline_version, "1.0.0");
    }
}
