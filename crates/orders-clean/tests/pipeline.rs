//! End-to-end tests for the cleansing pipeline.

use chrono::{TimeZone, Utc};

use orders_clean::{DEFAULT_PIPELINE_VERSION, RunStamp, run_pipeline};
use orders_model::RawRecord;

fn fixed_stamp() -> RunStamp {
    let run_start = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
    RunStamp::new(run_start, DEFAULT_PIPELINE_VERSION)
}

fn raw(
    order_id: &str,
    customer_name: &str,
    email: &str,
    country: &str,
    status: &str,
    product: &str,
    order_date: &str,
    quantity: &str,
    unit_price: &str,
) -> RawRecord {
    let field = |value: &str| {
        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    };
    RawRecord {
        order_id: field(order_id),
        customer_name: field(customer_name),
        email: field(email),
        country: field(country),
        status: field(status),
        product: field(product),
        order_date: field(order_date),
        quantity: field(quantity),
        unit_price: field(unit_price),
    }
}

/// Ten raw rows: two exact duplicates, one negative quantity, one
/// unparseable date, one malformed email. Six clean rows come out.
fn scenario_rows() -> Vec<RawRecord> {
    let duplicate = raw(
        "A-1",
        "alice cooper",
        "alice@example.com",
        "france",
        "SHIPPED",
        "Widget",
        "2024-01-15",
        "3",
        "9.995",
    );
    vec![
        duplicate.clone(),
        duplicate,
        raw(
            "A-2",
            " Bob Marley ",
            "bob@example.org",
            "jamaica",
            "pending",
            "Cable",
            "15/01/2024",
            "2",
            "4.50",
        ),
        raw(
            "A-3",
            "carol KING",
            "",
            "CANADA",
            "shipped",
            "Adapter",
            "Jan 18 2024",
            "1",
            "19.99",
        ),
        raw(
            "A-4",
            "dave brubeck",
            "dave@example.com",
            "usa",
            "delivered",
            "Dock",
            "2024/01/23",
            "-5",
            "12.00",
        ),
        raw(
            "A-5",
            "ella fitzgerald",
            "ella@example.com",
            "usa",
            "shipped",
            "Hub",
            "not-a-date",
            "2",
            "7.25",
        ),
        raw(
            "A-6",
            "fats domino",
            "bad-email",
            "usa",
            "pending",
            "Mount",
            "18-01-2024",
            "4",
            "3.10",
        ),
        raw(
            "A-7",
            "grace slick",
            "grace@example.com",
            "germany",
            "SHIPPED",
            "Stand",
            "January 18 2024",
            "10",
            "2.00",
        ),
        raw(
            "A-8",
            "howlin wolf",
            "NULL",
            "uk",
            "pending",
            "Frame",
            "2024-01-30",
            "6",
            "1.25",
        ),
        raw(
            "A-9",
            "irma thomas",
            "irma@example.com",
            "spain",
            "delivered",
            "Plate",
            "30/01/2024",
            "8",
            "5.00",
        ),
    ]
}

#[test]
fn test_end_to_end_scenario_counts() {
    let outcome = run_pipeline(scenario_rows(), &fixed_stamp());
    let report = &outcome.report;

    assert_eq!(report.input_count, 10);
    assert_eq!(report.duplicates_removed, 1);
    assert_eq!(report.dropped_invalid_quantity, 1);
    assert_eq!(report.dropped_missing_mandatory, 1); // the unparseable date
    assert_eq!(report.dropped_invalid_email, 1);
    assert_eq!(report.dropped_invalid_unit_price, 0);
    assert_eq!(report.output_count, 6);
    assert_eq!(outcome.records.len(), 6);
}

#[test]
fn test_every_record_carries_the_same_stamp() {
    let outcome = run_pipeline(scenario_rows(), &fixed_stamp());
    for record in &outcome.records {
        assert_eq!(record.cleaned_at, "2024-03-01 12:00:00");
        assert_eq!(record.pipeline_version, "1.0.0");
    }
}

#[test]
fn test_output_invariants_hold() {
    let outcome = run_pipeline(scenario_rows(), &fixed_stamp());
    for record in &outcome.records {
        assert!(!record.order_id.is_empty());
        assert!(!record.customer_name.is_empty());
        assert!(!record.product.is_empty());
        assert!(!record.country.is_empty());
        assert!(record.quantity > 0 && record.quantity <= 10_000);
        assert!(record.unit_price > 0.0);
        // Canonical date shape.
        assert_eq!(record.order_date.len(), 10);
        assert_eq!(&record.order_date[4..5], "-");
        assert_eq!(&record.order_date[7..8], "-");
        // No uppercase survives in status or email.
        if let Some(status) = &record.status {
            assert_eq!(status, &status.to_lowercase());
        }
        if let Some(email) = &record.email {
            assert_eq!(email, &email.to_lowercase());
        }
    }
}

#[test]
fn test_normalization_flows_into_output() {
    let outcome = run_pipeline(scenario_rows(), &fixed_stamp());
    let bob = outcome
        .records
        .iter()
        .find(|record| record.order_id == "A-2")
        .unwrap();
    assert_eq!(bob.customer_name, "Bob Marley");
    assert_eq!(bob.country, "Jamaica");
    assert_eq!(bob.order_date, "2024-01-15");
    assert_eq!(bob.order_total, 9.0);

    // Sentinel NULL email is absence, and absence passes validation.
    let howlin = outcome
        .records
        .iter()
        .find(|record| record.order_id == "A-8")
        .unwrap();
    assert_eq!(howlin.email, None);
}

#[test]
fn test_derived_total_rounds_boundary_cents() {
    let outcome = run_pipeline(scenario_rows(), &fixed_stamp());
    let alice = outcome
        .records
        .iter()
        .find(|record| record.order_id == "A-1")
        .unwrap();
    assert_eq!(alice.quantity, 3);
    assert_eq!(alice.unit_price, 9.995);
    assert_eq!(alice.order_total, 29.99);
}

#[test]
fn test_pipeline_is_idempotent_given_a_fixed_stamp() {
    let stamp = fixed_stamp();
    let first = run_pipeline(scenario_rows(), &stamp);
    let second = run_pipeline(scenario_rows(), &stamp);
    assert_eq!(first.records, second.records);
    assert_eq!(first.report, second.report);
}

#[test]
fn test_empty_input() {
    let outcome = run_pipeline(Vec::new(), &fixed_stamp());
    assert!(outcome.records.is_empty());
    assert_eq!(outcome.report, orders_clean::CleanseReport::default());
}

#[test]
fn test_report_shape() {
    let outcome = run_pipeline(scenario_rows(), &fixed_stamp());
    insta::assert_json_snapshot!(outcome.report, @r#"
    {
      "input_count": 10,
      "duplicates_removed": 1,
      "dropped_missing_mandatory": 1,
      "dropped_invalid_email": 1,
      "dropped_invalid_quantity": 1,
      "dropped_invalid_unit_price": 0,
      "output_count": 6
    }
    "#);
}
