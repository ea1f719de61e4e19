//! Columnar frame construction from cleaned records.

use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, PolarsResult, Series};

use orders_model::CleanRecord;

fn string_column(name: &str, records: &[CleanRecord], select: fn(&CleanRecord) -> &str) -> Column {
    let values: Vec<String> = records
        .iter()
        .map(|record| select(record).to_string())
        .collect();
    Series::new(name.into(), values).into_column()
}

/// Build a typed frame from cleaned records.
///
/// The `status` column is omitted: it is the partition key and lives in the
/// partition directory name, not in the data files.
pub fn build_orders_frame(records: &[CleanRecord]) -> PolarsResult<DataFrame> {
    let emails: Vec<Option<String>> = records.iter().map(|record| record.email.clone()).collect();
    let quantities: Vec<i64> = records.iter().map(|record| record.quantity).collect();
    let unit_prices: Vec<f64> = records.iter().map(|record| record.unit_price).collect();
    let order_totals: Vec<f64> = records.iter().map(|record| record.order_total).collect();

    let columns: Vec<Column> = vec![
        string_column("order_id", records, |record| record.order_id.as_str()),
        string_column("customer_name", records, |record| {
            record.customer_name.as_str()
        }),
        Series::new("email".into(), emails).into_column(),
        string_column("country", records, |record| record.country.as_str()),
        string_column("product", records, |record| record.product.as_str()),
        string_column("order_date", records, |record| record.order_date.as_str()),
        Series::new("quantity".into(), quantities).into_column(),
        Series::new("unit_price".into(), unit_prices).into_column(),
        Series::new("order_total".into(), order_totals).into_column(),
        string_column("cleaned_at", records, |record| record.cleaned_at.as_str()),
        string_column("pipeline_version", records, |record| {
            record.pipeline_version.as_str()
        }),
    ];
    DataFrame::new(columns)
}
