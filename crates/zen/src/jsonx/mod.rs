//! JSON helpers on top of `serde_json`.
//!
//! ```
//! use std::collections::BTreeMap;
//! use zen::jsonx;
//!
//! let map = BTreeMap::from([("bar", 2), ("foo", 1)]);
//! assert_eq!(jsonx::to_string(&map).unwrap(), r#"{"bar":2,"foo":1}"#);
//! ```

mod int;

pub use int::*;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::Result;

/// Serializes `value` into a compact JSON string.
///
/// # Errors
///
/// Returns [`crate::Error::Json`] if `value` cannot be serialized (for example
/// a map with non-string keys).
pub fn to_string<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

/// Serializes `value` into compact JSON bytes.
///
/// # Errors
///
/// See [`to_string`].
pub fn to_bytes<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(value)?)
}

/// Parses a JSON object into a map.
///
/// # Errors
///
/// Returns [`crate::Error::Json`] if `json` is not valid JSON or is not an
/// object.
pub fn to_map(json: &str) -> Result<Map<String, Value>> {
    Ok(serde_json::from_str(json)?)
}

/// Human readable name of a value's JSON type, used in error messages.
pub(crate) fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use serde_json::json;

    #[test]
    fn to_map_parses_objects() {
        let map = to_map(r#"{"foo":1,"bar":"x"}"#).unwrap();
        assert_eq!(map.get("foo"), Some(&json!(1)));
        assert_eq!(map.get("bar"), Some(&json!("x")));
    }

    #[test]
    fn to_map_rejects_non_objects() {
        assert!(matches!(to_map("[1, 2]"), Err(Error::Json(_))));
        assert!(matches!(to_map("{"), Err(Error::Json(_))));
    }

    #[test]
    fn to_bytes_matches_to_string() {
        let value = json!({"a": [1, 2, 3]});
        assert_eq!(
            to_bytes(&value).unwrap(),
            to_string(&value).unwrap().into_bytes()
        );
    }

    #[test]
    fn non_string_keys_fail_to_serialize() {
        let map = std::collections::HashMap::from([((1, 2), "tuple key")]);
        assert!(matches!(to_string(&map), Err(Error::Json(_))));
    }
}
