//! This module exports different types for JSON interactions.
//!
//! It keeps the rest of the codebase independent of the exact `serde_json` entry points used.

use serde::de::{DeserializeOwned, Error as DeError, Unexpected};
use serde::ser::Serialize;

pub type Value = serde_json::Value;
pub type JsonMap = serde_json::Map<String, Value>;

pub use serde_json::json;
pub use serde_json::Error as JsonError;

pub const NULL: Value = Value::Null;

/// Parses raw bytes into a JSON value.
#[allow(clippy::missing_errors_doc)] // It's obvious
pub fn from_slice(v: &[u8]) -> Result<Value, JsonError> {
    serde_json::from_slice(v)
}

#[allow(clippy::missing_errors_doc)] // It's obvious
pub fn from_str(s: &str) -> Result<Value, JsonError> {
    serde_json::from_str(s)
}

#[allow(clippy::missing_errors_doc)] // It's obvious
pub fn from_value<T>(v: Value) -> Result<T, JsonError>
where
    T: DeserializeOwned,
{
    serde_json::from_value(v)
}

#[allow(clippy::missing_errors_doc)] // It's obvious
pub fn to_string<T>(v: &T) -> Result<String, JsonError>
where
    T: Serialize,
{
    serde_json::to_string(v)
}

/// Unwraps a JSON object, erroring in the same way `serde_json` would for any other shape.
pub(crate) fn into_object(v: Value) -> Result<JsonMap, JsonError> {
    match v {
        Value::Object(map) => Ok(map),
        other => Err(JsonError::invalid_type(unexpected(&other), &"a JSON object")),
    }
}

fn unexpected(v: &Value) -> Unexpected<'_> {
    match v {
        Value::Null => Unexpected::Unit,
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::Number(n) => match n.as_f64() {
            Some(f) => Unexpected::Float(f),
            None => Unexpected::Other("number"),
        },
        Value::String(s) => Unexpected::Str(s),
        Value::Array(_) => Unexpected::Seq,
        Value::Object(_) => Unexpected::Map,
    }
}
