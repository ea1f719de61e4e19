//! Order record type definitions.

pub mod record;

pub use record::{CleanRecord, FIELD_NAMES, RawRecord};
