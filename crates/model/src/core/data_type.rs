use crate::core::value::Value;
use serde::{Deserialize, Serialize};

/// Column typing for tabular sources. Cells that cannot be parsed under the
/// declared type become null; that is a data-quality event, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    Int,
    Float,
    String,
}

impl DataType {
    pub fn parse(&self, cell: &str) -> Option<Value> {
        let cell = cell.trim();
        if cell.is_empty() {
            return None;
        }
        match self {
            DataType::Int => match cell.parse::<i64>() {
                Ok(v) => Some(Value::Int(v)),
                // Tolerate integer ids exported in float form ("3.0")
                Err(_) => cell
                    .parse::<f64>()
                    .ok()
                    .filter(|f| f.fract() == 0.0)
                    .map(|f| Value::Int(f as i64)),
            },
            DataType::Float => cell.parse::<f64>().ok().map(Value::Float),
            DataType::String => Some(Value::String(cell.to_string())),
        }
    }
}
