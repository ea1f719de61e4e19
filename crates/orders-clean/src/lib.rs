//! Deterministic record-cleansing rules for raw order exports.
//!
//! The pipeline runs these stages in order, each a pure function over one
//! record (deduplication is the only whole-collection stage):
//! 1. **Dedupe**: collapse exact-duplicate records
//! 2. **Normalize**: trim, null sentinels, per-field casing
//! 3. **Dates**: parse mixed order_date formats to `YYYY-MM-DD`
//! 4. **Validate**: mandatory fields, email shape, numeric ranges
//! 5. **Cast/Derive**: typed numerics and the order_total column
//! 6. **Stamp**: run-wide audit fields
//!
//! Records failing validation are excluded, never repaired; the per-rule
//! drop counts are the only trace they leave.

pub mod audit;
pub mod datetime;
pub mod dedupe;
pub mod derive;
pub mod normalize;
pub mod numeric;
pub mod pipeline;
pub mod validate;

pub use audit::{DEFAULT_PIPELINE_VERSION, RunStamp, stamp_record};
pub use datetime::{DATE_FORMATS, DateFormat, normalize_order_date, parse_order_date};
pub use dedupe::{DedupeResult, dedupe_records};
pub use derive::{TypedOrder, cast_record, round_half_up_2};
pub use normalize::{normalize_record, title_case};
pub use numeric::{parse_f64, parse_i64};
pub use pipeline::{CleanseReport, PipelineOutcome, run_pipeline};
pub use validate::{DropReason, QUANTITY_MAX, validate_record};
