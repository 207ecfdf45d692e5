//! Scalar literals inlined into statement text.
//!
//! Numbers render as their decimal form, strings are wrapped in single quotes.
//! Embedded quotes are **not** escaped: this is a text builder, not an injection
//! guard. Only feed it trusted values.

use crate::error::{SqlError, SqlResult};
use serde::Deserialize;
use std::fmt;

/// A scalar value that can be written as a SQL literal.
///
/// Anything other than a number or a string cannot be represented. At the
/// dynamic boundary ([`TryFrom<serde_json::Value>`] and serde) booleans, null,
/// arrays and objects are rejected with [`SqlError::UnsupportedLiteral`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "serde_json::Value")]
pub enum Value {
    Int(i64),
    /// Rendered with Rust's `Display`. Non-finite values render as `NaN` /
    /// `inf`, which is not valid SQL; use [`Value::try_float`] to reject them.
    Float(f64),
    Text(String),
}

impl Value {
    /// Returns `true` for `Int` and `Float`.
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_))
    }

    /// A float literal, rejecting NaN and infinities.
    pub fn try_float(v: f64) -> SqlResult<Self> {
        if v.is_finite() {
            Ok(Value::Float(v))
        } else {
            Err(SqlError::unsupported_literal(format!("non-finite float {v}")))
        }
    }

    /// Write this value as a literal into `out`.
    pub fn write_literal(&self, out: &mut String) {
        use fmt::Write as _;
        // Writing into a String cannot fail.
        let _ = write!(out, "{self}");
    }
}

/// Render a value as a SQL literal: `123`, `1.5`, `'Tom'`.
pub fn format_literal(value: &Value) -> String {
    value.to_string()
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::Text(s) => write!(f, "'{s}'"),
        }
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::Int(i64::from(v))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(f64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Value::Text(v.clone())
    }
}

impl TryFrom<serde_json::Value> for Value {
    type Error = SqlError;

    fn try_from(v: serde_json::Value) -> SqlResult<Self> {
        use serde_json::Value as Json;

        match v {
            Json::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Value::Int(i))
                } else if let Some(f) = n.as_f64() {
                    Value::try_float(f)
                } else {
                    Err(SqlError::unsupported_literal(format!("number {n}")))
                }
            }
            Json::String(s) => Ok(Value::Text(s)),
            Json::Null => Err(SqlError::unsupported_literal("null")),
            Json::Bool(_) => Err(SqlError::unsupported_literal("boolean")),
            Json::Array(_) => Err(SqlError::unsupported_literal("array")),
            Json::Object(_) => Err(SqlError::unsupported_literal("object")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_are_unquoted() {
        assert_eq!(format_literal(&Value::from(123)), "123");
        assert_eq!(format_literal(&Value::from(-7i64)), "-7");
        assert_eq!(format_literal(&Value::from(1.5)), "1.5");
        assert_eq!(format_literal(&Value::from(20.0)), "20");
    }

    #[test]
    fn strings_are_single_quoted() {
        assert_eq!(format_literal(&Value::from("Tom")), "'Tom'");
        assert_eq!(format_literal(&Value::from("123")), "'123'");
        assert_eq!(format_literal(&Value::from(String::new())), "''");
    }

    #[test]
    fn embedded_quotes_are_not_escaped() {
        assert_eq!(format_literal(&Value::from("O'Brien")), "'O'Brien'");
    }

    #[test]
    fn json_scalars_convert() {
        let v = Value::try_from(serde_json::json!(42)).unwrap();
        assert_eq!(v, Value::Int(42));
        let v = Value::try_from(serde_json::json!(0.25)).unwrap();
        assert_eq!(v, Value::Float(0.25));
        let v = Value::try_from(serde_json::json!("Ann")).unwrap();
        assert_eq!(v, Value::Text("Ann".into()));
    }

    #[test]
    fn json_non_scalars_are_rejected() {
        for (input, kind) in [
            (serde_json::json!(null), "null"),
            (serde_json::json!(true), "boolean"),
            (serde_json::json!([1, 2]), "array"),
            (serde_json::json!({"a": 1}), "object"),
        ] {
            let err = Value::try_from(input).unwrap_err();
            assert!(err.is_unsupported_literal());
            assert_eq!(err, SqlError::unsupported_literal(kind));
        }
    }

    #[test]
    fn non_finite_floats_are_rejected() {
        assert_eq!(Value::try_float(2.5).unwrap(), Value::Float(2.5));
        for v in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = Value::try_float(v).unwrap_err();
            assert!(err.is_unsupported_literal());
        }
        assert_eq!(
            Value::try_float(f64::INFINITY).unwrap_err(),
            SqlError::unsupported_literal("non-finite float inf")
        );
    }

    #[test]
    fn is_number_matches_numeric_variants() {
        assert!(Value::from(1).is_number());
        assert!(Value::from(0.5).is_number());
        assert!(!Value::from("1").is_number());
    }

    #[test]
    fn write_literal_appends() {
        let mut out = String::from("id=");
        Value::from(5).write_literal(&mut out);
        assert_eq!(out, "id=5");
    }
}
