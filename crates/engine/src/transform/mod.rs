use crate::normalize::{normalize_category, normalize_phone, parse_date};
use model::{
    core::value::Value,
    entities::{customer::Customer, product::Product, sale::SaleLine},
    quality::{Counter, Entity, QualityTracker},
    records::row::RowData,
};
use std::collections::HashSet;
use tracing::info;

/// Steps shared by every entity, in fixed order: discard fully-empty rows
/// (uncounted), count the rest as processed, then deduplicate by full-row
/// equality.
fn prepare(entity: Entity, rows: Vec<RowData>, tracker: &mut QualityTracker) -> Vec<RowData> {
    let rows: Vec<RowData> = rows.into_iter().filter(|r| !r.is_empty()).collect();
    tracker.record(entity, Counter::Processed, rows.len());

    let before = rows.len();
    let rows = dedup(rows);
    tracker.record(entity, Counter::Duplicates, before - rows.len());
    rows
}

/// Remove exact repeats, keeping the first occurrence.
fn dedup(rows: Vec<RowData>) -> Vec<RowData> {
    let mut seen = HashSet::new();
    rows.into_iter().filter(|r| seen.insert(r.clone())).collect()
}

/// Clean customer rows. Rows with a null email are dropped; `missing` is the
/// total null cells of the dropped rows, counted after normalization to stay
/// compatible with the source metric.
pub fn clean_customers(rows: Vec<RowData>, tracker: &mut QualityTracker) -> Vec<Customer> {
    let mut rows = prepare(Entity::Customers, rows, tracker);

    for row in &mut rows {
        let phone = normalize_phone(&row.get_value("phone"));
        row.set_value("phone", phone.map(Value::String));
        let date = parse_date(&row.get_value("registration_date"));
        row.set_value("registration_date", date.map(Value::Date));
    }

    let (kept, dropped): (Vec<RowData>, Vec<RowData>) = rows
        .into_iter()
        .partition(|r| !r.get_value("email").is_null());
    let missing: usize = dropped.iter().map(RowData::null_count).sum();
    tracker.record(Entity::Customers, Counter::Missing, missing);

    let cleaned: Vec<Customer> = kept.iter().filter_map(Customer::from_row).collect();
    info!(kept = cleaned.len(), dropped = dropped.len(), "Cleaned customers");
    cleaned
}

/// Clean product rows. Null price and stock default in place; `missing` is
/// the null cells remaining after defaulting.
pub fn clean_products(rows: Vec<RowData>, tracker: &mut QualityTracker) -> Vec<Product> {
    let mut rows = prepare(Entity::Products, rows, tracker);

    for row in &mut rows {
        let category = normalize_category(&row.get_value("category"));
        row.set_value("category", Some(Value::String(category)));
        if row.get_value("price").is_null() {
            row.set_value("price", Some(Value::Float(0.0)));
        }
        if row.get_value("stock_quantity").is_null() {
            row.set_value("stock_quantity", Some(Value::Int(0)));
        }
    }

    let missing: usize = rows.iter().map(RowData::null_count).sum();
    tracker.record(Entity::Products, Counter::Missing, missing);

    let cleaned: Vec<Product> = rows.iter().map(Product::from_row).collect();
    info!(kept = cleaned.len(), "Cleaned products");
    cleaned
}

/// Clean sales rows. Rows missing either id are dropped; a null transaction
/// date is kept. `missing` is the null cells remaining after the drop.
pub fn clean_sales(rows: Vec<RowData>, tracker: &mut QualityTracker) -> Vec<SaleLine> {
    let mut rows = prepare(Entity::Sales, rows, tracker);

    for row in &mut rows {
        let date = parse_date(&row.get_value("transaction_date"));
        row.set_value("transaction_date", date.map(Value::Date));
    }

    rows.retain(|r| {
        !r.get_value("customer_id").is_null() && !r.get_value("product_id").is_null()
    });

    let missing: usize = rows.iter().map(RowData::null_count).sum();
    tracker.record(Entity::Sales, Counter::Missing, missing);

    let cleaned: Vec<SaleLine> = rows.iter().filter_map(SaleLine::from_row).collect();
    info!(kept = cleaned.len(), "Cleaned sales");
    cleaned
}
