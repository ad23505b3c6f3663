//! Common slice operations.
//!
//! # Conditional
//!
//! [`all`], [`any`], [`contains`], [`count`] and [`index`] inspect a slice
//! against a predicate or value. [`filter_in`] and [`filter_not_in`] build
//! membership predicates for [`filter`].
//!
//! # Transformation
//!
//! [`filter`], [`map`], [`chunks`], [`cartesian`], [`limit`], [`unique`],
//! [`unique_by`] and [`range`] produce new collections.
//!
//! # Selection and modification
//!
//! [`first`], [`last`], [`pop`] and [`insert`].
//!
//! ```
//! use zen::slice;
//!
//! let values = slice::range(1, 5);
//! assert_eq!(values, [1, 2, 3, 4, 5]);
//! assert_eq!(slice::filter(&values, |v| *v < 3), [1, 2]);
//! assert_eq!(slice::chunks(&values, 2).unwrap(), [vec![1, 2], vec![3, 4], vec![5]]);
//! assert!(slice::all(&values, |v| *v > 0));
//! ```

mod predicate;
mod select;
#[cfg(test)]
mod tests;
mod transform;

pub use predicate::*;
pub use select::*;
pub use transform::*;
