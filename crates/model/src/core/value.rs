use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt, hash::Hash};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    String(String),
    Date(NaiveDate),
    Null,
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        use Value::*;
        std::mem::discriminant(self).hash(state);
        match self {
            Int(v) => v.hash(state),
            Float(v) => {
                // Hash the bits of the float to handle NaN and -0.0 correctly
                let bits = v.to_bits();
                bits.hash(state);
            }
            String(v) => v.hash(state),
            Date(v) => v.hash(state),
            Null => {} // Nothing to hash for Null
        }
    }
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            Value::Float(v) => Some(*v as i64),
            Value::String(v) => v.parse::<i64>().ok(),
            Value::Date(_) => None,
            Value::Null => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(v) => Some(*v as f64),
            Value::Float(v) => Some(*v),
            Value::String(v) => v.parse::<f64>().ok(),
            Value::Date(_) => None,
            Value::Null => None,
        }
    }

    pub fn as_string(&self) -> Option<String> {
        match self {
            Value::Int(v) => Some(v.to_string()),
            Value::Float(v) => Some(v.to_string()),
            Value::String(v) => Some(v.clone()),
            Value::Date(v) => Some(v.to_string()),
            Value::Null => None,
        }
    }

    /// String form of any variant, including `Null`. Used where a raw cell
    /// must be coerced to text before normalization.
    pub fn coerce_string(&self) -> String {
        match self {
            Value::Null => "None".to_string(),
            other => other.as_string().unwrap_or_default(),
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Value::Date(v) => Some(*v),
            _ => None,
        }
    }

    /// Lift an optional string into a `Value`, mapping `None` to `Null`.
    pub fn from_opt_string(opt: Option<String>) -> Value {
        opt.map(Value::String).unwrap_or(Value::Null)
    }

    pub fn from_opt_f64(opt: Option<f64>) -> Value {
        opt.map(Value::Float).unwrap_or(Value::Null)
    }

    pub fn from_opt_i64(opt: Option<i64>) -> Value {
        opt.map(Value::Int).unwrap_or(Value::Null)
    }

    pub fn from_opt_date(opt: Option<NaiveDate>) -> Value {
        opt.map(Value::Date).unwrap_or(Value::Null)
    }

    pub fn compare(&self, other: &Value) -> Option<Ordering> {
        use Value::*;
        match (self, other) {
            (Int(a), Int(b)) => Some(a.cmp(b)),
            (Float(a), Float(b)) => a.partial_cmp(b),
            (Int(a), Float(b)) => (*a as f64).partial_cmp(b),
            (Float(a), Int(b)) => a.partial_cmp(&(*b as f64)),
            (String(a), String(b)) => Some(a.cmp(b)),
            (Date(a), Date(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::String(v) => write!(f, "'{}'", v.replace("'", "''")),
            Value::Date(v) => write!(f, "'{v}'"),
            Value::Null => write!(f, "NULL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn float_values_hash_and_compare() {
        let mut set = HashSet::new();
        set.insert(Value::Float(1.5));
        set.insert(Value::Float(1.5));
        set.insert(Value::Float(-0.0));
        set.insert(Value::Float(0.0));
        // -0.0 and 0.0 have different bit patterns
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn null_coerces_to_none_string() {
        assert_eq!(Value::Null.coerce_string(), "None");
        assert_eq!(Value::Int(42).coerce_string(), "42");
        assert!(Value::Null.as_string().is_none());
    }

    #[test]
    fn string_numbers_convert() {
        assert_eq!(Value::String("17".into()).as_i64(), Some(17));
        assert_eq!(Value::String("2.5".into()).as_f64(), Some(2.5));
        assert_eq!(Value::String("n/a".into()).as_i64(), None);
    }
}
