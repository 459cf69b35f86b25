use crate::core::{data_type::DataType, value::Value};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct FieldValue {
    pub name: String,
    pub value: Option<Value>,
    pub data_type: DataType,
}

impl FieldValue {
    pub fn is_null(&self) -> bool {
        match &self.value {
            None => true,
            Some(v) => v.is_null(),
        }
    }
}

/// One raw source row: an ordered mapping of column name to untyped scalar.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct RowData {
    pub entity: String,
    pub field_values: Vec<FieldValue>,
}

impl RowData {
    pub fn new(entity: &str, field_values: Vec<FieldValue>) -> Self {
        RowData {
            entity: entity.to_string(),
            field_values,
        }
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.field_values
            .iter()
            .find(|f| f.name.eq_ignore_ascii_case(field))
    }

    pub fn get_value(&self, field: &str) -> Value {
        self.get(field)
            .and_then(|f| f.value.clone())
            .unwrap_or(Value::Null)
    }

    pub fn set_value(&mut self, field: &str, value: Option<Value>) {
        if let Some(f) = self
            .field_values
            .iter_mut()
            .find(|f| f.name.eq_ignore_ascii_case(field))
        {
            f.value = value;
        }
    }

    /// True when every field of the row is null or absent.
    pub fn is_empty(&self) -> bool {
        self.field_values.iter().all(|f| f.is_null())
    }

    /// Number of null cells in the row.
    pub fn null_count(&self) -> usize {
        self.field_values.iter().filter(|f| f.is_null()).count()
    }
}
