//! Conversions from dynamic JSON values into Rust scalars and maps.
//!
//! These helpers are meant for loosely typed inputs (configuration blobs,
//! template data, webhook payloads) where the shape is known but the exact
//! JSON type is not: `"5"`, `5` and `5.0` should all read as `5`.
//!
//! ```
//! use serde_json::json;
//! use zen::conv;
//!
//! assert_eq!(conv::to_int(&json!("123")), Ok(123));
//! assert_eq!(conv::to_bool(&json!(5.4)), Ok(true));
//! assert_eq!(conv::to_string(&json!(1.5)), "1.500000");
//! ```


use serde::Serialize;
use serde_json::{Map, Value};

use crate::{Error, Result, jsonx::kind_of};

/// Converts a value to `bool`.
///
/// Numbers are `true` when non-zero, strings when non-empty, `null` is
/// `false`.
///
/// # Errors
///
/// Returns [`Error::UnsupportedType`] for arrays and objects.
pub fn to_bool(value: &Value) -> Result<bool> {
    match value {
        Value::Bool(b) => Ok(*b),
        Value::Number(n) => Ok(n.as_f64().is_some_and(|f| f != 0.0)),
        Value::String(s) => Ok(!s.is_empty()),
        Value::Null => Ok(false),
        other => Err(unsupported("to_bool", other)),
    }
}

/// Converts a value to `i64`.
///
/// Booleans become `0`/`1`, floats truncate toward zero, strings are parsed as
/// base-10 integers without surrounding whitespace and `null` is `0`.
///
/// # Errors
///
/// - [`Error::Parse`] for strings that are not integers.
/// - [`Error::InvalidArgument`] for unsigned integers above `i64::MAX` and
///   non-finite floats.
/// - [`Error::UnsupportedType`] for arrays and objects.
pub fn to_int(value: &Value) -> Result<i64> {
    match value {
        Value::Bool(b) => Ok(i64::from(*b)),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(i)
            } else if n.is_u64() {
                Err(Error::InvalidArgument {
                    reason: format!("{n} does not fit into i64"),
                })
            } else {
                float_to_int(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        Value::String(s) => s.parse().map_err(|_| Error::Parse {
            input: s.clone(),
            target: "integer",
        }),
        Value::Null => Ok(0),
        other => Err(unsupported("to_int", other)),
    }
}

/// Converts a value to `f64`.
///
/// Booleans become `0.0`/`1.0`, strings are parsed as floats and `null` is
/// `0.0`. Strings with surrounding whitespace do not parse.
///
/// # Errors
///
/// - [`Error::Parse`] for strings that are not numbers.
/// - [`Error::UnsupportedType`] for arrays and objects.
pub fn to_float(value: &Value) -> Result<f64> {
    match value {
        Value::Bool(b) => Ok(f64::from(u8::from(*b))),
        Value::Number(n) => n.as_f64().ok_or_else(|| Error::InvalidArgument {
            reason: format!("{n} is not representable as f64"),
        }),
        Value::String(s) => s.parse().map_err(|_| Error::Parse {
            input: s.clone(),
            target: "float",
        }),
        Value::Null => Ok(0.0),
        other => Err(unsupported("to_float", other)),
    }
}

/// Converts a value to its display string.
///
/// Integers print in decimal, floats with six decimals (`1.5` becomes
/// `"1.500000"`), strings as-is, `null` as the empty string. Arrays and
/// objects fall back to compact JSON.
pub fn to_string(value: &Value) -> String {
    match value {
        Value::Bool(b) => b.to_string(),
        Value::Number(n) if n.is_f64() => format!("{:.6}", n.as_f64().unwrap_or_default()),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Builds a map from alternating keys and values.
///
/// Keys are stringified with [`to_string`]. A repeated key keeps the last
/// value.
///
/// ```
/// use serde_json::json;
/// use zen::conv;
///
/// let map = conv::compose(&[json!("foo"), json!(1), json!("bar"), json!(2)]).unwrap();
/// assert_eq!(serde_json::Value::Object(map), json!({"foo": 1, "bar": 2}));
/// ```
///
/// # Errors
///
/// Returns [`Error::Arity`] when a key has no value.
pub fn compose(vals: &[Value]) -> Result<Map<String, Value>> {
    if vals.len() % 2 != 0 {
        return Err(Error::Arity {
            op: "compose",
            min: vals.len() + 1,
            got: vals.len(),
        });
    }
    Ok(vals
        .chunks_exact(2)
        .map(|pair| (to_string(&pair[0]), pair[1].clone()))
        .collect())
}

/// Converts any serializable struct or map into a JSON object map.
///
/// # Errors
///
/// - [`Error::Json`] if `value` cannot be serialized.
/// - [`Error::UnsupportedType`] if `value` does not serialize to an object.
pub fn to_map<T: Serialize + ?Sized>(value: &T) -> Result<Map<String, Value>> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        other => Err(unsupported("to_map", &other)),
    }
}

#[allow(clippy::cast_possible_truncation)]
fn float_to_int(f: f64) -> Result<i64> {
    if !f.is_finite() {
        return Err(Error::InvalidArgument {
            reason: format!("{f} is not a finite number"),
        });
    }
    Ok(f as i64)
}

fn unsupported(op: &'static str, value: &Value) -> Error {
    Error::UnsupportedType {
        op,
        kind: kind_of(value),
    }
}
