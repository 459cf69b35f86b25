use crate::{core::value::Value, entities::InsertRecord};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Insert shape for the parent order row. The order id is assigned by the
/// store at insert time and captured by the loader.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewOrder {
    pub customer_id: i64,
    pub order_date: Option<NaiveDate>,
    pub total_amount: Option<f64>,
}

impl InsertRecord for NewOrder {
    const TABLE: &'static str = "orders";
    const COLUMNS: &'static [&'static str] = &["customer_id", "order_date", "total_amount"];

    fn insert_values(&self) -> Vec<Value> {
        vec![
            Value::Int(self.customer_id),
            Value::from_opt_date(self.order_date),
            Value::from_opt_f64(self.total_amount),
        ]
    }
}

/// Insert shape for the dependent line item, referencing a captured order id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewOrderItem {
    pub order_id: u64,
    pub product_id: i64,
    pub quantity: Option<i64>,
    pub unit_price: Option<f64>,
    pub subtotal: Option<f64>,
}

impl InsertRecord for NewOrderItem {
    const TABLE: &'static str = "order_items";
    const COLUMNS: &'static [&'static str] =
        &["order_id", "product_id", "quantity", "unit_price", "subtotal"];

    fn insert_values(&self) -> Vec<Value> {
        vec![
            Value::Int(self.order_id as i64),
            Value::Int(self.product_id),
            Value::from_opt_i64(self.quantity),
            Value::from_opt_f64(self.unit_price),
            Value::from_opt_f64(self.subtotal),
        ]
    }
}
