use connectors::file::csv::metadata::{CsvColumnSpec, CsvTableSpec};
use model::core::data_type::DataType;

// Date columns stay typed as strings at extraction; the transformer owns
// date parsing so that failures become nulls instead of read errors.

pub fn customers_table() -> CsvTableSpec {
    CsvTableSpec::new(
        "customers",
        vec![
            CsvColumnSpec::new("first_name", DataType::String),
            CsvColumnSpec::new("last_name", DataType::String),
            CsvColumnSpec::new("email", DataType::String),
            CsvColumnSpec::new("phone", DataType::String),
            CsvColumnSpec::new("city", DataType::String),
            CsvColumnSpec::new("registration_date", DataType::String),
        ],
    )
}

pub fn products_table() -> CsvTableSpec {
    CsvTableSpec::new(
        "products",
        vec![
            CsvColumnSpec::new("product_name", DataType::String),
            CsvColumnSpec::new("category", DataType::String),
            CsvColumnSpec::new("price", DataType::Float),
            CsvColumnSpec::new("stock_quantity", DataType::Int),
        ],
    )
}

pub fn sales_table() -> CsvTableSpec {
    CsvTableSpec::new(
        "sales",
        vec![
            CsvColumnSpec::new("customer_id", DataType::Int),
            CsvColumnSpec::new("product_id", DataType::Int),
            CsvColumnSpec::new("transaction_date", DataType::String),
            CsvColumnSpec::new("quantity", DataType::Int),
            CsvColumnSpec::new("unit_price", DataType::Float),
        ],
    )
}
