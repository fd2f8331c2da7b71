use std::{collections::HashMap, fmt::Display};

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    String(String),
    I64(i64),
    F64(f64),
    Bool(bool),
    Null,
}

pub type Row = HashMap<String, Value>;

static NULL: Value = Value::Null;

impl Value {
    /// Numeric view of the value. Strings count when they parse as a number.
    pub fn as_f64(&self) -> Option<f64> {
        return match self {
            Value::I64(val) => Some(*val as f64),
            Value::F64(val) => Some(*val),
            Value::String(val) => val.trim().parse::<f64>().ok(),
            Value::Bool(_) | Value::Null => None,
        };
    }

    /// Integer view of the value, fractional parts are truncated.
    pub fn as_i64(&self) -> Option<i64> {
        return match self {
            Value::I64(val) => Some(*val),
            Value::F64(val) if val.is_finite() => Some(val.trunc() as i64),
            Value::String(val) => {
                let val = val.trim();
                val.parse::<i64>()
                    .ok()
                    .or_else(|| Value::F64(val.parse::<f64>().ok()?).as_i64())
            }
            _ => None,
        };
    }

    pub fn as_str(&self) -> Option<&str> {
        return match self {
            Value::String(val) => Some(val.as_str()),
            _ => None,
        };
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::String(val) => f.write_str(val),
            Value::I64(val) => write!(f, "{val}"),
            Value::F64(val) if val.is_finite() && val.fract() == 0.0 => write!(f, "{val:.1}"),
            Value::F64(val) => write!(f, "{val}"),
            Value::Bool(val) => write!(f, "{val}"),
            Value::Null => Ok(()),
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        return match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(val) => Value::Bool(val),
            serde_json::Value::Number(num) => match num.as_i64() {
                Some(val) => Value::I64(val),
                None => num.as_f64().map_or(Value::Null, Value::F64),
            },
            serde_json::Value::String(val) => Value::String(val),
            // Nested structures are kept as their compact JSON text
            other => Value::String(other.to_string()),
        };
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        return Value::String(value.to_string());
    }
}

/// Converts a JSON object into a row, anything else is not a row.
pub fn row_from_json(value: serde_json::Value) -> Option<Row> {
    return match value {
        serde_json::Value::Object(map) => Some(
            map.into_iter()
                .map(|(key, val)| (key, Value::from(val)))
                .collect(),
        ),
        _ => None,
    };
}

/// Looks up a column, treating a missing key as null.
pub fn get<'a>(row: &'a Row, column: &str) -> &'a Value {
    return row.get(column).unwrap_or(&NULL);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(Value::I64(42), "42")]
    #[case(Value::F64(2.0), "2.0")]
    #[case(Value::F64(1.25), "1.25")]
    #[case(Value::from("US"), "US")]
    #[case(Value::Bool(true), "true")]
    #[case(Value::Null, "")]
    fn test_display(#[case] value: Value, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
    }

    #[rstest]
    #[case(Value::I64(7), Some(7))]
    #[case(Value::F64(7.9), Some(7))]
    #[case(Value::from("12"), Some(12))]
    #[case(Value::from("12.5"), Some(12))]
    #[case(Value::from("n/a"), None)]
    #[case(Value::Null, None)]
    #[case(Value::Bool(true), None)]
    fn test_as_i64(#[case] value: Value, #[case] expected: Option<i64>) {
        assert_eq!(value.as_i64(), expected);
    }

    #[test]
    fn test_from_json_number() {
        assert_eq!(Value::from(json!(5)), Value::I64(5));
        assert_eq!(Value::from(json!(5.5)), Value::F64(5.5));
        assert_eq!(Value::from(json!(null)), Value::Null);
    }

    #[test]
    fn test_from_json_nested() {
        assert_eq!(Value::from(json!([1, 2])), Value::from("[1,2]"));
    }

    #[test]
    fn test_row_from_json() {
        let row = row_from_json(json!({"country": "US", "hits": 5})).unwrap();
        assert_eq!(get(&row, "country"), &Value::from("US"));
        assert_eq!(get(&row, "hits"), &Value::I64(5));
        assert_eq!(get(&row, "missing"), &Value::Null);
        assert!(row_from_json(json!("US")).is_none());
    }
}
