//! Record validation: mandatory fields, email shape, numeric ranges.
//!
//! Validation is a filter, not a repair shop. A record either passes every
//! check or is excluded with a [`DropReason`]; no value is ever coerced to
//! a default. Checks run in a fixed order and the first failure wins, so
//! each dropped record counts against exactly one rule.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use orders_model::RawRecord;

use crate::numeric::{parse_f64, parse_i64};

/// Upper bound for plausible order quantities.
pub const QUANTITY_MAX: i64 = 10_000;

/// Required address shape: local part, `@`, domain, dot, 2+ letter TLD.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}$")
        .expect("invalid email regex")
});

/// Why a record was excluded from the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DropReason {
    #[error("missing mandatory field")]
    MissingMandatory,
    #[error("invalid email format")]
    InvalidEmail,
    #[error("invalid quantity")]
    InvalidQuantity,
    #[error("invalid unit price")]
    InvalidUnitPrice,
}

fn has_value(field: Option<&str>) -> bool {
    field.is_some_and(|value| !value.is_empty())
}

/// Check a normalized, date-parsed record against every validation rule.
///
/// Rule order: mandatory fields, then email shape, then quantity range,
/// then unit price. A numeric cast failure counts the same as an absent
/// value.
pub fn validate_record(record: &RawRecord) -> Result<(), DropReason> {
    let mandatory_ok = has_value(record.order_id.as_deref())
        && has_value(record.customer_name.as_deref())
        && has_value(record.product.as_deref())
        && has_value(record.country.as_deref())
        && record.order_date.is_some();
    if !mandatory_ok {
        return Err(DropReason::MissingMandatory);
    }

    if let Some(email) = record.email.as_deref()
        && !EMAIL_REGEX.is_match(email)
    {
        return Err(DropReason::InvalidEmail);
    }

    match record.quantity.as_deref().and_then(parse_i64) {
        Some(quantity) if quantity > 0 && quantity <= QUANTITY_MAX => {}
        _ => return Err(DropReason::InvalidQuantity),
    }

    match record.unit_price.as_deref().and_then(parse_f64) {
        Some(unit_price) if unit_price > 0.0 => {}
        _ => return Err(DropReason::InvalidUnitPrice),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_record() -> RawRecord {
        RawRecord {
            order_id: Some("A-1".to_string()),
            customer_name: Some("Alice Cooper".to_string()),
            email: Some("alice@example.com".to_string()),
            country: Some("France".to_string()),
            status: Some("shipped".to_string()),
            product: Some("Widget".to_string()),
            order_date: Some("2024-01-15".to_string()),
            quantity: Some("3".to_string()),
            unit_price: Some("9.99".to_string()),
        }
    }

    #[test]
    fn test_valid_record_passes() {
        assert_eq!(validate_record(&valid_record()), Ok(()));
    }

    #[test]
    fn test_mandatory_fields() {
        let cases: [fn(&mut RawRecord); 5] = [
            |r| r.order_id = None,
            |r| r.customer_name = Some(String::new()),
            |r| r.product = None,
            |r| r.country = Some(String::new()),
            |r| r.order_date = None,
        ];
        for clear in cases {
            let mut record = valid_record();
            clear(&mut record);
            assert_eq!(validate_record(&record), Err(DropReason::MissingMandatory));
        }
    }

    #[test]
    fn test_optional_fields_may_be_absent() {
        let mut record = valid_record();
        record.email = None;
        record.status = None;
        assert_eq!(validate_record(&record), Ok(()));
    }

    #[test]
    fn test_email_shape() {
        let accepted = ["a@b.co", "first.last+tag@mail-host.example.org", "x_1%@d.io"];
        for email in accepted {
            let mut record = valid_record();
            record.email = Some(email.to_string());
            assert_eq!(validate_record(&record), Ok(()), "{email}");
        }
        let rejected = ["a@b", "bad-email", "@b.co", "a@.co", "a@b.c", "a b@c.co"];
        for email in rejected {
            let mut record = valid_record();
            record.email = Some(email.to_string());
            assert_eq!(
                validate_record(&record),
                Err(DropReason::InvalidEmail),
                "{email}"
            );
        }
    }

    #[test]
    fn test_quantity_range() {
        let cases = [
            ("0", Err(DropReason::InvalidQuantity)),
            ("-5", Err(DropReason::InvalidQuantity)),
            ("10001", Err(DropReason::InvalidQuantity)),
            ("10000", Ok(())),
            ("1", Ok(())),
            ("2.5", Err(DropReason::InvalidQuantity)),
            ("many", Err(DropReason::InvalidQuantity)),
        ];
        for (quantity, expected) in cases {
            let mut record = valid_record();
            record.quantity = Some(quantity.to_string());
            assert_eq!(validate_record(&record), expected, "{quantity}");
        }
        let mut record = valid_record();
        record.quantity = None;
        assert_eq!(validate_record(&record), Err(DropReason::InvalidQuantity));
    }

    #[test]
    fn test_unit_price_must_be_positive() {
        let cases = [
            ("0", Err(DropReason::InvalidUnitPrice)),
            ("-1.50", Err(DropReason::InvalidUnitPrice)),
            ("free", Err(DropReason::InvalidUnitPrice)),
            ("0.01", Ok(())),
        ];
        for (price, expected) in cases {
            let mut record = valid_record();
            record.unit_price = Some(price.to_string());
            assert_eq!(validate_record(&record), expected, "{price}");
        }
        let mut record = valid_record();
        record.unit_price = None;
        assert_eq!(validate_record(&record), Err(DropReason::InvalidUnitPrice));
    }

    #[test]
    fn test_first_failing_rule_wins() {
        let mut record = valid_record();
        record.order_id = None;
        record.email = Some("bad".to_string());
        assert_eq!(validate_record(&record), Err(DropReason::MissingMandatory));
    }
}
