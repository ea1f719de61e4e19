//! Numeric casting and the derived order_total column.

use orders_model::RawRecord;

use crate::numeric::{parse_f64, parse_i64};

/// A validated record with its numeric fields typed and the total derived.
/// Still missing the audit stamp; see [`crate::audit::stamp_record`].
#[derive(Debug, Clone, PartialEq)]
pub struct TypedOrder {
    pub order_id: String,
    pub customer_name: String,
    pub email: Option<String>,
    pub country: String,
    pub status: Option<String>,
    pub product: String,
    pub order_date: String,
    pub quantity: i64,
    pub unit_price: f64,
    pub order_total: f64,
}

/// Round to two decimal places, half-up, over the shortest decimal
/// rendering of the value (half-up is away from zero for negatives).
///
/// The binary product of two parsed decimals can land just below an exact
/// half-cent: 3 * 9.995 is 29.984999... in an f64, yet its shortest
/// rendering is 29.985 and the expected total is 29.99. Rounding the
/// rendering instead of the binary value keeps those boundary cents
/// stable.
#[must_use]
pub fn round_half_up_2(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let rendered = format!("{value}");
    let unsigned = rendered.strip_prefix('-').unwrap_or(&rendered);
    let Some((int_part, frac_part)) = unsigned.split_once('.') else {
        return value;
    };
    if frac_part.len() <= 2 {
        return value;
    }
    let mut cents: i64 = match format!("{int_part}{}", &frac_part[..2]).parse() {
        Ok(cents) => cents,
        // Magnitudes beyond cent precision round to themselves.
        Err(_) => return value,
    };
    if frac_part.as_bytes()[2] >= b'5' {
        cents += 1;
    }
    let rounded = cents as f64 / 100.0;
    if rendered.starts_with('-') { -rounded } else { rounded }
}

/// Convert a validated record's numeric fields to typed values and derive
/// `order_total = round(quantity * unit_price, 2)`.
///
/// Validation already established that every field parses and every
/// mandatory field is present, so a well-formed pipeline never sees `None`
/// here; the stage itself drops nothing.
pub fn cast_record(record: RawRecord) -> Option<TypedOrder> {
    let quantity = record.quantity.as_deref().and_then(parse_i64)?;
    let unit_price = record.unit_price.as_deref().and_then(parse_f64)?;
    Some(TypedOrder {
        order_id: record.order_id?,
        customer_name: record.customer_name?,
        email: record.email,
        country: record.country?,
        status: record.status,
        product: record.product?,
        order_date: record.order_date?,
        quantity,
        unit_price,
        order_total: round_half_up_2(quantity as f64 * unit_price),
    })
}
