//! Variadic arithmetic over slices.
//!
//! The typed functions work on any [`Number`]. The `*_dyn` variants (behind
//! the `json` feature) work on [`serde_json::Value`] slices where the element
//! type is only known at runtime.
//!
//! Every operation needs at least two values.
//!
//! ```
//! use zen::mathx;
//!
//! assert_eq!(mathx::sum(&[4, 2, 1]), Ok(7));
//! assert_eq!(mathx::sub(&[4, 2, 1]), Ok(1));
//! assert_eq!(mathx::div(&[5.0, 2.0, 2.0]), Ok(1.25));
//! ```

#[cfg(feature = "json")]
mod dynamic;
#[cfg(test)]
mod tests;

#[cfg(feature = "json")]
pub use dynamic::*;

use crate::{Error, Number, Result, error::require_arity};

const MIN_OPERANDS: usize = 2;

/// Returns the sum of the given values.
///
/// # Errors
///
/// - [`Error::Arity`] with fewer than two values.
/// - [`Error::Overflow`] if an integer sum overflows.
pub fn sum<T: Number>(vals: &[T]) -> Result<T> {
    require_arity("sum", MIN_OPERANDS, vals.len())?;
    vals.iter().try_fold(T::ZERO, |acc, &v| {
        acc.checked_add(v).ok_or(Error::Overflow { op: "sum" })
    })
}

/// Subtracts every following value from the first one.
///
/// # Errors
///
/// - [`Error::Arity`] with fewer than two values.
/// - [`Error::Overflow`] if integer subtraction overflows.
pub fn sub<T: Number>(vals: &[T]) -> Result<T> {
    fold_from_first("sub", vals, |acc, v| {
        acc.checked_sub(v).ok_or(Error::Overflow { op: "sub" })
    })
}

/// Returns the product of the given values.
///
/// # Errors
///
/// - [`Error::Arity`] with fewer than two values.
/// - [`Error::Overflow`] if an integer product overflows.
pub fn mul<T: Number>(vals: &[T]) -> Result<T> {
    fold_from_first("mul", vals, |acc, v| {
        acc.checked_mul(v).ok_or(Error::Overflow { op: "mul" })
    })
}

/// Divides the first value by every following value in turn.
///
/// Integer division truncates. Float division by zero yields an infinity (or
/// NaN for `0.0 / 0.0`).
///
/// # Errors
///
/// - [`Error::Arity`] with fewer than two values.
/// - [`Error::DivisionByZero`] for an integer zero divisor.
/// - [`Error::Overflow`] for `MIN / -1` on signed integers.
pub fn div<T: Number>(vals: &[T]) -> Result<T> {
    fold_from_first("div", vals, |acc, v| {
        if T::INTEGRAL && v.is_zero() {
            return Err(Error::DivisionByZero);
        }
        acc.checked_div(v).ok_or(Error::Overflow { op: "div" })
    })
}

fn fold_from_first<T: Number>(
    op: &'static str,
    vals: &[T],
    mut f: impl FnMut(T, T) -> Result<T>,
) -> Result<T> {
    require_arity(op, MIN_OPERANDS, vals.len())?;
    let (&first, rest) = vals
        .split_first()
        .ok_or(Error::Arity { op, min: MIN_OPERANDS, got: 0 })?;
    rest.iter().try_fold(first, |acc, &v| f(acc, v))
}
