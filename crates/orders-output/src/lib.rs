//! Typed, status-partitioned Parquet output for cleaned orders.

pub mod frame;
pub mod parquet;
pub mod report;

pub use frame::build_orders_frame;
pub use parquet::{DEFAULT_PARTITION, PartitionSummary, write_partitioned_parquet};
pub use report::write_cleanse_report_json;
