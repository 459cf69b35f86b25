pub mod customer;
pub mod order;
pub mod product;
pub mod sale;

use crate::core::value::Value;

/// A cleaned record that maps to a single row insert.
pub trait InsertRecord {
    const TABLE: &'static str;
    const COLUMNS: &'static [&'static str];

    fn insert_values(&self) -> Vec<Value>;
}
