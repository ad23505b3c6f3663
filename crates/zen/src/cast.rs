//! Casting dynamic JSON slices into typed vectors.
//!
//! ```
//! use serde_json::json;
//! use zen::cast;
//!
//! let values = [json!(1), json!(2), json!(3)];
//! assert_eq!(cast::slice::<i32>(&values).unwrap(), [1, 2, 3]);
//!
//! let values = [json!("a"), json!(null)];
//! assert_eq!(
//!     cast::option_slice::<String>(&values).unwrap(),
//!     [Some("a".to_string()), None]
//! );
//! ```

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::Result;

/// Casts every element into `T`.
///
/// # Errors
///
/// Returns [`crate::Error::Json`] for the first element that does not
/// deserialize into `T`.
pub fn slice<T: DeserializeOwned>(vals: &[Value]) -> Result<Vec<T>> {
    vals.iter().map(cast_one).collect()
}

/// Casts every element into `Option<T>`, mapping `null` to `None`.
///
/// # Errors
///
/// Returns [`crate::Error::Json`] for the first non-null element that does not
/// deserialize into `T`.
pub fn option_slice<T: DeserializeOwned>(vals: &[Value]) -> Result<Vec<Option<T>>> {
    vals.iter()
        .map(|v| match v {
            Value::Null => Ok(None),
            v => cast_one(v).map(Some),
        })
        .collect()
}

fn cast_one<T: DeserializeOwned>(value: &Value) -> Result<T> {
    Ok(T::deserialize(value)?)
}
