use crate::{core::value::Value, entities::InsertRecord, records::row::RowData};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A cleaned customer row. The missing-value policy guarantees a non-null
/// email; every other field may still be null and is left for the store's
/// constraints to judge.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Customer {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub registration_date: Option<NaiveDate>,
}

impl Customer {
    /// Build from a normalized row. Returns `None` when the email is null,
    /// which the transformer has already filtered out.
    pub fn from_row(row: &RowData) -> Option<Self> {
        Some(Customer {
            first_name: row.get_value("first_name").as_string(),
            last_name: row.get_value("last_name").as_string(),
            email: row.get_value("email").as_string()?,
            phone: row.get_value("phone").as_string(),
            city: row.get_value("city").as_string(),
            registration_date: row.get_value("registration_date").as_date(),
        })
    }
}

impl InsertRecord for Customer {
    const TABLE: &'static str = "customers";
    const COLUMNS: &'static [&'static str] = &[
        "first_name",
        "last_name",
        "email",
        "phone",
        "city",
        "registration_date",
    ];

    fn insert_values(&self) -> Vec<Value> {
        vec![
            Value::from_opt_string(self.first_name.clone()),
            Value::from_opt_string(self.last_name.clone()),
            Value::String(self.email.clone()),
            Value::from_opt_string(self.phone.clone()),
            Value::from_opt_string(self.city.clone()),
            Value::from_opt_date(self.registration_date),
        ]
    }
}
