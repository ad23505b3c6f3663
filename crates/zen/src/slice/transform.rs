use std::{collections::HashSet, hash::Hash};

use crate::{Error, Result};

/// Returns the elements satisfying `f`, in order.
pub fn filter<T: Clone>(slice: &[T], f: impl Fn(&T) -> bool) -> Vec<T> {
    slice.iter().filter(|&v| f(v)).cloned().collect()
}

/// Applies `f` to every element.
pub fn map<T, U>(slice: &[T], f: impl Fn(&T) -> U) -> Vec<U> {
    slice.iter().map(f).collect()
}

/// Returns at most the first `limit` elements.
pub fn limit<T>(slice: &[T], limit: usize) -> &[T] {
    &slice[..slice.len().min(limit)]
}

/// Splits `slice` into chunks of `size`; the last chunk may be shorter.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when `size` is zero.
pub fn chunks<T: Clone>(slice: &[T], size: usize) -> Result<Vec<Vec<T>>> {
    if size == 0 {
        return Err(Error::InvalidArgument {
            reason: "chunk size must be greater than 0".to_string(),
        });
    }
    Ok(slice.chunks(size).map(<[T]>::to_vec).collect())
}

/// Cartesian product of the given sets.
///
/// With no sets the product is a single empty combination; any empty set
/// makes the product empty.
///
/// ```
/// use zen::slice;
///
/// let product = slice::cartesian(&[vec![1, 2], vec![3, 4]]);
/// assert_eq!(product, [[1, 3], [1, 4], [2, 3], [2, 4]]);
/// ```
pub fn cartesian<T: Clone>(sets: &[Vec<T>]) -> Vec<Vec<T>> {
    sets.iter().fold(vec![Vec::new()], |acc, set| {
        acc.iter()
            .flat_map(|prefix| {
                set.iter().map(move |item| {
                    let mut combination = Vec::with_capacity(prefix.len() + 1);
                    combination.extend_from_slice(prefix);
                    combination.push(item.clone());
                    combination
                })
            })
            .collect()
    })
}

/// Removes duplicates, keeping the first occurrence of each value.
pub fn unique<T: Clone + Eq + Hash>(slice: &[T]) -> Vec<T> {
    unique_by(slice, T::clone)
}

/// Removes elements whose key was already seen, keeping first occurrences.
///
/// ```
/// use zen::slice;
///
/// let words = ["apple", "avocado", "banana", "blueberry", "cherry"];
/// let firsts = slice::unique_by(&words, |w| w.chars().next());
/// assert_eq!(firsts, ["apple", "banana", "cherry"]);
/// ```
pub fn unique_by<T: Clone, K: Eq + Hash>(slice: &[T], key: impl Fn(&T) -> K) -> Vec<T> {
    let mut seen = HashSet::with_capacity(slice.len());
    slice
        .iter()
        .filter(|&v| seen.insert(key(v)))
        .cloned()
        .collect()
}

/// Inclusive integer range `from..=to`. Empty when `to < from`.
pub fn range(from: i64, to: i64) -> Vec<i64> {
    (from..=to).collect()
}
