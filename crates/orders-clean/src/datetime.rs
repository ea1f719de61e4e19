//! Order date parsing and canonical formatting.
//!
//! Source exports mix several date spellings. Parsing tries a fixed,
//! ordered list of formats and accepts the first one that consumes the
//! whole trimmed input. The order is part of the contract: it breaks ties
//! for ambiguous all-numeric strings, so a `DD-MM-YYYY` string is never
//! taken for the ISO form (the ISO pattern is tried first and wants the
//! year in front). Anything no format accepts maps to absence; unparseable
//! dates are dropped downstream, never guessed.

use chrono::NaiveDate;

use orders_model::RawRecord;

/// Canonical output format for all order dates.
pub const CANONICAL_DATE_FORMAT: &str = "%Y-%m-%d";

/// One accepted order_date input format.
#[derive(Debug, Clone, Copy)]
pub struct DateFormat {
    /// chrono strftime pattern.
    pub pattern: &'static str,
    /// Example of an accepted input.
    pub example: &'static str,
}

/// Accepted input formats, tried in order. First full-string match wins.
pub const DATE_FORMATS: [DateFormat; 6] = [
    DateFormat {
        pattern: "%Y-%m-%d",
        example: "2024-01-15",
    },
    DateFormat {
        pattern: "%d/%m/%Y",
        example: "15/01/2024",
    },
    DateFormat {
        pattern: "%Y/%m/%d",
        example: "2024/01/23",
    },
    DateFormat {
        pattern: "%b %d %Y",
        example: "Jan 18 2024",
    },
    DateFormat {
        pattern: "%B %d %Y",
        example: "January 18 2024",
    },
    DateFormat {
        pattern: "%d-%m-%Y",
        example: "18-01-2024",
    },
];

/// Parse a raw order_date string against the accepted formats.
///
/// Returns `None` for empty input, calendar-invalid dates, and strings no
/// format consumes completely.
pub fn parse_order_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format.pattern).ok())
}

/// Rewrite a record's order_date to the canonical `YYYY-MM-DD` string, or
/// to absence when unparseable. Absent input stays absent; no error either
/// way.
#[must_use]
pub fn normalize_order_date(mut record: RawRecord) -> RawRecord {
    record.order_date = record
        .order_date
        .as_deref()
        .and_then(parse_order_date)
        .map(|date| date.format(CANONICAL_DATE_FORMAT).to_string());
    record
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canonical(value: &str) -> Option<String> {
        parse_order_date(value).map(|date| date.format(CANONICAL_DATE_FORMAT).to_string())
    }

    #[test]
    fn test_accepted_formats() {
        assert_eq!(canonical("2024-01-15").as_deref(), Some("2024-01-15"));
        assert_eq!(canonical("15/01/2024").as_deref(), Some("2024-01-15"));
        assert_eq!(canonical("2024/01/23").as_deref(), Some("2024-01-23"));
        assert_eq!(canonical("Jan 18 2024").as_deref(), Some("2024-01-18"));
        assert_eq!(canonical("January 18 2024").as_deref(), Some("2024-01-18"));
        assert_eq!(canonical("18-01-2024").as_deref(), Some("2024-01-18"));
    }

    #[test]
    fn test_format_examples_all_parse() {
        for format in &DATE_FORMATS {
            assert!(
                parse_order_date(format.example).is_some(),
                "example {} for {} did not parse",
                format.example,
                format.pattern
            );
        }
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        assert_eq!(canonical("  2024-01-15 ").as_deref(), Some("2024-01-15"));
    }

    #[test]
    fn test_invalid_calendar_date_is_rejected() {
        assert_eq!(canonical("31/02/2024"), None);
        assert_eq!(canonical("2024-13-01"), None);
    }

    #[test]
    fn test_unparseable_maps_to_absence() {
        assert_eq!(canonical("not-a-date"), None);
        assert_eq!(canonical(""), None);
        assert_eq!(canonical("2024-01-15 10:30"), None);
    }

    #[test]
    fn test_day_first_hyphen_form_is_not_taken_for_iso() {
        // 15-01-2024 must resolve via %d-%m-%Y, not as a year-15 ISO date.
        assert_eq!(canonical("15-01-2024").as_deref(), Some("2024-01-15"));
    }

    #[test]
    fn test_normalize_order_date_rewrites_in_place() {
        let record = RawRecord {
            order_date: Some("15/01/2024".to_string()),
            ..RawRecord::default()
        };
        let normalized = normalize_order_date(record);
        assert_eq!(normalized.order_date.as_deref(), Some("2024-01-15"));

        let bad = RawRecord {
            order_date: Some("soon".to_string()),
            ..RawRecord::default()
        };
        assert_eq!(normalize_order_date(bad).order_date, None);

        let absent = RawRecord::default();
        assert_eq!(normalize_order_date(absent).order_date, None);
    }
}
