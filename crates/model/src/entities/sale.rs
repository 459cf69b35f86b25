use crate::records::row::RowData;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A cleaned sales row. Ids are guaranteed non-null by the missing-value
/// policy; quantity and unit price may be null and flow to the store as
/// nulls, where NOT NULL constraints turn them into row-level failures.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SaleLine {
    pub customer_id: i64,
    pub product_id: i64,
    pub transaction_date: Option<NaiveDate>,
    pub quantity: Option<i64>,
    pub unit_price: Option<f64>,
}

impl SaleLine {
    /// Build from a normalized row. Returns `None` when either id is null,
    /// which the transformer has already filtered out.
    pub fn from_row(row: &RowData) -> Option<Self> {
        Some(SaleLine {
            customer_id: row.get_value("customer_id").as_i64()?,
            product_id: row.get_value("product_id").as_i64()?,
            transaction_date: row.get_value("transaction_date").as_date(),
            quantity: row.get_value("quantity").as_i64(),
            unit_price: row.get_value("unit_price").as_f64(),
        })
    }

    /// quantity x unit_price, when both are present.
    pub fn total_amount(&self) -> Option<f64> {
        match (self.quantity, self.unit_price) {
            (Some(q), Some(p)) => Some(q as f64 * p),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_amount_needs_both_factors() {
        let mut sale = SaleLine {
            customer_id: 1,
            product_id: 2,
            transaction_date: None,
            quantity: Some(3),
            unit_price: Some(12.5),
        };
        assert_eq!(sale.total_amount(), Some(37.5));

        sale.unit_price = None;
        assert_eq!(sale.total_amount(), None);
    }
}
