//! Tagged representation of loosely typed input values

use std::fmt;

use serde_json::Value;

/// A single untrusted input value
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Bool(bool),
    /// JSON integer
    Integer(i64),
    /// JSON number with a fractional part or exponent, or an integer
    /// beyond the i64 range
    Real(f64),
    Text(String),
    /// Arrays and objects; carries the kind name
    Other(&'static str),
}

impl RawValue {
    /// Convert a JSON value; `null` maps to `None` (treated as absent)
    pub fn from_json(value: &Value) -> Option<RawValue> {
        let raw = match value {
            Value::Null => return None,
            Value::Bool(b) => RawValue::Bool(*b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    RawValue::Integer(i)
                } else {
                    // Huge unsigned integers widen to f64 so bounds checks see them.
                    // Finite by construction: JSON has no NaN/inf literals.
                    RawValue::Real(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            Value::String(s) => RawValue::Text(s.clone()),
            other => RawValue::Other(json_kind(other)),
        };
        Some(raw)
    }

    /// Short name of the value's kind, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            RawValue::Bool(_) => "boolean",
            RawValue::Integer(_) => "integer",
            RawValue::Real(_) => "number",
            RawValue::Text(_) => "string",
            RawValue::Other(kind) => kind,
        }
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Bool(b) => write!(f, "{}", b),
            RawValue::Integer(i) => write!(f, "{}", i),
            RawValue::Real(r) => write!(f, "{}", r),
            RawValue::Text(s) => f.write_str(s),
            RawValue::Other(kind) => write!(f, "<{}>", kind),
        }
    }
}

impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        RawValue::Bool(value)
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        RawValue::Integer(value)
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Real(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

/// JSON kind name for messages
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
