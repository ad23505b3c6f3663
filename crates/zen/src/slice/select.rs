use crate::{Error, Result};

/// Returns the first element.
pub fn first<T>(slice: &[T]) -> Option<&T> {
    slice.first()
}

/// Returns the last element.
pub fn last<T>(slice: &[T]) -> Option<&T> {
    slice.last()
}

/// Removes and returns the element at `index`, or the last element when
/// `index` is `None`. Later elements shift left.
///
/// ```
/// use zen::slice;
///
/// let mut values = vec![1, 2, 3];
/// assert_eq!(slice::pop(&mut values, None), Ok(3));
/// assert_eq!(slice::pop(&mut values, Some(0)), Ok(1));
/// assert_eq!(values, [2]);
/// ```
///
/// # Errors
///
/// Returns [`Error::IndexOutOfRange`] if `index` is past the end or the vector
/// is empty.
pub fn pop<T>(vec: &mut Vec<T>, index: Option<usize>) -> Result<T> {
    let len = vec.len();
    let index = match index {
        Some(i) => i,
        None => len.checked_sub(1).ok_or(Error::IndexOutOfRange { index: 0, len })?,
    };
    if index >= len {
        return Err(Error::IndexOutOfRange { index, len });
    }
    Ok(vec.remove(index))
}

/// Inserts `value` at `index`, shifting later elements right. `index == len`
/// appends.
///
/// # Errors
///
/// Returns [`Error::IndexOutOfRange`] if `index > len`.
pub fn insert<T>(vec: &mut Vec<T>, index: usize, value: T) -> Result<()> {
    let len = vec.len();
    if index > len {
        return Err(Error::IndexOutOfRange { index, len });
    }
    vec.insert(index, value);
    Ok(())
}
