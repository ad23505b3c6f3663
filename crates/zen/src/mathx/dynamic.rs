use serde_json::Value;

use super::MIN_OPERANDS;
use crate::{Error, Result, error::require_arity, jsonx::kind_of};

/// Dynamic version of [`super::sum`].
///
/// The first value selects the arithmetic: signed integer, unsigned integer,
/// float, or string concatenation.
///
/// ```
/// use serde_json::json;
/// use zen::mathx;
///
/// assert_eq!(mathx::sum_dyn(&[json!(1), json!(2)]), Ok(json!(3)));
/// assert_eq!(mathx::sum_dyn(&[json!("foo"), json!("bar")]), Ok(json!("foobar")));
/// ```
///
/// # Errors
///
/// See [`super::sum`]; additionally [`Error::UnsupportedType`] for a
/// non-numeric, non-string first value and [`Error::TypeMismatch`] when a later
/// value does not match the first.
pub fn sum_dyn(vals: &[Value]) -> Result<Value> {
    if let Some(Value::String(_)) = vals.first() {
        require_arity("sum", MIN_OPERANDS, vals.len())?;
        let parts = collect("sum", vals, "string", |v| v.as_str())?;
        return Ok(Value::String(parts.concat()));
    }
    evaluate("sum", vals, super::sum, super::sum, super::sum)
}

/// Dynamic version of [`super::sub`].
///
/// # Errors
///
/// See [`sum_dyn`]. Strings are not supported.
pub fn sub_dyn(vals: &[Value]) -> Result<Value> {
    evaluate("sub", vals, super::sub, super::sub, super::sub)
}

/// Dynamic version of [`super::mul`].
///
/// # Errors
///
/// See [`sum_dyn`]. Strings are not supported.
pub fn mul_dyn(vals: &[Value]) -> Result<Value> {
    evaluate("mul", vals, super::mul, super::mul, super::mul)
}

/// Dynamic version of [`super::div`].
///
/// # Errors
///
/// See [`sum_dyn`]. Strings are not supported, and a float division that does
/// not produce a finite number is [`Error::InvalidArgument`].
pub fn div_dyn(vals: &[Value]) -> Result<Value> {
    evaluate("div", vals, super::div, super::div, super::div)
}

fn evaluate(
    op: &'static str,
    vals: &[Value],
    signed: fn(&[i64]) -> Result<i64>,
    unsigned: fn(&[u64]) -> Result<u64>,
    float: fn(&[f64]) -> Result<f64>,
) -> Result<Value> {
    require_arity(op, MIN_OPERANDS, vals.len())?;
    match &vals[0] {
        Value::Number(n) if n.is_i64() => {
            signed(&collect(op, vals, "signed integer", Value::as_i64)?).map(Value::from)
        }
        Value::Number(n) if n.is_u64() => {
            unsigned(&collect(op, vals, "unsigned integer", Value::as_u64)?).map(Value::from)
        }
        // Floats accept any number: `[1.5, 2]` is a float sum.
        Value::Number(_) => {
            let result = float(&collect(op, vals, "number", Value::as_f64)?)?;
            serde_json::Number::from_f64(result)
                .map(Value::Number)
                .ok_or_else(|| Error::InvalidArgument {
                    reason: format!("{op} produced a non-finite result"),
                })
        }
        other => Err(Error::UnsupportedType {
            op,
            kind: kind_of(other),
        }),
    }
}

fn collect<'a, T>(
    op: &'static str,
    vals: &'a [Value],
    expected: &'static str,
    extract: impl Fn(&'a Value) -> Option<T>,
) -> Result<Vec<T>> {
    vals.iter()
        .map(|v| {
            extract(v).ok_or(Error::TypeMismatch {
                op,
                expected,
                found: kind_of(v),
            })
        })
        .collect()
}
