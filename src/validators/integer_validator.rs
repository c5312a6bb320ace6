use serde_json::Value;

use crate::error::{Error, Result};

pub struct IntegerValidator;

impl IntegerValidator {
    /// Accepts only JSON integers that fit in an `i64`. Floats (even `1.0`), strings,
    /// booleans and `null` are rejected.
    pub fn strict_integer(value: &Value, field: &str) -> Result<i64> {
        match value {
            Value::Number(number) => number.as_i64().ok_or_else(|| {
                Error::invalid_argument(field, format!("{number} is not a 64-bit integer"))
            }),
            other => Err(Error::invalid_argument(
                field,
                format!("expected an integer, got {}", Self::kind(other)),
            )),
        }
    }

    /// Like [`IntegerValidator::strict_integer`], falling back to `default` when the value is absent.
    pub fn optional_integer(value: Option<&Value>, field: &str, default: i64) -> Result<i64> {
        value.map_or(Ok(default), |value| Self::strict_integer(value, field))
    }

    fn kind(value: &Value) -> &'static str {
        match value {
            Value::Null => "null",
            Value::Bool(_) => "a boolean",
            Value::Number(_) => "a number",
            Value::String(_) => "a string",
            Value::Array(_) => "an array",
            Value::Object(_) => "an object",
        }
    }
}
