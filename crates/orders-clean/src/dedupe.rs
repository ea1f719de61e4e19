//! Exact-duplicate removal.

use std::collections::HashSet;

use orders_model::RawRecord;

/// Outcome of the deduplication stage.
#[derive(Debug)]
pub struct DedupeResult {
    /// Surviving records, first occurrence of each kept in input order.
    pub records: Vec<RawRecord>,
    /// Number of removed duplicates.
    pub removed: usize,
}

/// Collapse records whose fields are all byte-identical to a single
/// occurrence. Relative order among survivors is preserved, though nothing
/// downstream depends on it.
pub fn dedupe_records(records: Vec<RawRecord>) -> DedupeResult {
    let input_count = records.len();
    let mut seen = HashSet::with_capacity(input_count);
    let mut survivors = Vec::with_capacity(input_count);
    for record in records {
        if seen.insert(record.clone()) {
            survivors.push(record);
        }
    }
    let removed = input_count - survivors.len();
    DedupeResult {
        records: survivors,
        removed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(order_id: &str) -> RawRecord {
        RawRecord {
            order_id: Some(order_id.to_string()),
            ..RawRecord::default()
        }
    }

    #[test]
    fn test_exact_duplicates_collapse_to_one() {
        let records = vec![record("A-1"), record("A-2"), record("A-1"), record("A-1")];
        let result = dedupe_records(records);
        assert_eq!(result.records.len(), 2);
        assert_eq!(result.removed, 2);
    }

    #[test]
    fn test_near_duplicates_survive() {
        let mut other = record("A-1");
        other.quantity = Some("2".to_string());
        let result = dedupe_records(vec![record("A-1"), other]);
        assert_eq!(result.records.len(), 2);
        assert_eq!(result.removed, 0);
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        let result = dedupe_records(Vec::new());
        assert!(result.records.is_empty());
        assert_eq!(result.removed, 0);
    }
}
