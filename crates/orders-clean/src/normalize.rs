//! Field normalization: trimming, null sentinels, casing.
//!
//! Upstream exports spell absence as the literal text `NULL` (any casing);
//! normalization turns that into true absence so later stages only deal
//! with one notion of "missing". Casing rules follow the analytics
//! conventions: names and countries in title case, status and email in
//! lowercase.

use orders_model::RawRecord;

/// Title-case a string: first letter of each whitespace-separated token
/// uppercased, the rest lowercased. Token boundaries collapse to single
/// spaces.
#[must_use]
pub fn title_case(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    for (idx, token) in value.split_whitespace().enumerate() {
        if idx > 0 {
            result.push(' ');
        }
        let mut chars = token.chars();
        if let Some(first) = chars.next() {
            result.extend(first.to_uppercase());
            result.extend(chars.flat_map(char::to_lowercase));
        }
    }
    result
}

/// Trim the value and collapse blanks and the literal `NULL` sentinel to
/// absence. The upstream reader hands blank cells through verbatim; after
/// this stage only one notion of "missing" remains.
fn clean_value(value: Option<String>) -> Option<String> {
    let value = value?;
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("null") {
        return None;
    }
    Some(trimmed.to_string())
}

/// Normalize one record. Never drops the record, only rewrites fields:
/// trim, `NULL` sentinel to absence, then field-specific casing.
#[must_use]
pub fn normalize_record(record: RawRecord) -> RawRecord {
    record.map_fields(|field, value| {
        let cleaned = clean_value(value)?;
        let cased = match field {
            "customer_name" | "country" => title_case(&cleaned),
            "status" | "email" => cleaned.to_lowercase(),
            _ => cleaned,
        };
        Some(cased)
    })
}
