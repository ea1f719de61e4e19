//! Raw and cleaned order record types.
//!
//! A [`RawRecord`] is the untyped view of one source row: every field is an
//! optional string exactly as read from the export. `None` means the column
//! was missing from the source file; an empty string means the cell was
//! present but blank. The two are kept distinct until normalization and
//! validation decide what counts as absent.
//!
//! A [`CleanRecord`] is a row that survived every cleansing stage: mandatory
//! fields are plain strings, numeric fields are typed, and the audit stamp
//! is attached.

use serde::{Deserialize, Serialize};

/// Field names of the raw order export, in source column order.
pub const FIELD_NAMES: [&str; 9] = [
    "order_id",
    "customer_name",
    "email",
    "country",
    "status",
    "product",
    "order_date",
    "quantity",
    "unit_price",
];

/// One raw order row. All fields are untyped optional strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RawRecord {
    pub order_id: Option<String>,
    pub customer_name: Option<String>,
    pub email: Option<String>,
    pub country: Option<String>,
    pub status: Option<String>,
    pub product: Option<String>,
    pub order_date: Option<String>,
    pub quantity: Option<String>,
    pub unit_price: Option<String>,
}

impl RawRecord {
    /// Rebuild the record by passing every field, together with its name,
    /// through `rewrite`. Fields are visited in [`FIELD_NAMES`] order.
    #[must_use]
    pub fn map_fields(self, rewrite: impl Fn(&'static str, Option<String>) -> Option<String>) -> Self {
        Self {
            order_id: rewrite("order_id", self.order_id),
            customer_name: rewrite("customer_name", self.customer_name),
            email: rewrite("email", self.email),
            country: rewrite("country", self.country),
            status: rewrite("status", self.status),
            product: rewrite("product", self.product),
            order_date: rewrite("order_date", self.order_date),
            quantity: rewrite("quantity", self.quantity),
            unit_price: rewrite("unit_price", self.unit_price),
        }
    }

    /// Assign a raw value to the field named `name`. Unknown names are ignored.
    pub fn set_field(&mut self, name: &str, value: Option<String>) {
        match name {
            "order_id" => self.order_id = value,
            "customer_name" => self.customer_name = value,
            "email" => self.email = value,
            "country" => self.country = value,
            "status" => self.status = value,
            "product" => self.product = value,
            "order_date" => self.order_date = value,
            "quantity" => self.quantity = value,
            "unit_price" => self.unit_price = value,
            _ => {}
        }
    }
}

/// One fully cleansed, typed order row.
///
/// Invariants: mandatory strings are non-empty, `order_date` is a canonical
/// `YYYY-MM-DD` string, `quantity` is in `(0, 10000]`, `unit_price` is a
/// positive finite number, and `order_total` equals the rounded product of
/// the two. `cleaned_at` and `pipeline_version` are shared by every record
/// of one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanRecord {
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
    pub cleaned_at: String,
    pub pipeline_version: String,
}
