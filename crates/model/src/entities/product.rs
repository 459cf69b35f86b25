use crate::{core::value::Value, entities::InsertRecord, records::row::RowData};
use serde::{Deserialize, Serialize};

/// A cleaned product row. Price and stock are defaulted during cleaning, so
/// they are concrete here; the name may still be null.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub product_name: Option<String>,
    pub category: String,
    pub price: f64,
    pub stock_quantity: i64,
}

impl Product {
    pub fn from_row(row: &RowData) -> Self {
        Product {
            product_name: row.get_value("product_name").as_string(),
            category: row.get_value("category").coerce_string(),
            price: row.get_value("price").as_f64().unwrap_or(0.0),
            stock_quantity: row.get_value("stock_quantity").as_i64().unwrap_or(0),
        }
    }
}

impl InsertRecord for Product {
    const TABLE: &'static str = "products";
    const COLUMNS: &'static [&'static str] =
        &["product_name", "category", "price", "stock_quantity"];

    fn insert_values(&self) -> Vec<Value> {
        vec![
            Value::from_opt_string(self.product_name.clone()),
            Value::String(self.category.clone()),
            Value::Float(self.price),
            Value::Int(self.stock_quantity),
        ]
    }
}
