/// Returns `true` if every element satisfies `f` (vacuously `true` when empty).
pub fn all<T>(slice: &[T], f: impl Fn(&T) -> bool) -> bool {
    slice.iter().all(f)
}

/// Returns `true` if at least one element satisfies `f`.
pub fn any<T>(slice: &[T], f: impl Fn(&T) -> bool) -> bool {
    slice.iter().any(f)
}

/// Returns the number of elements satisfying `f`.
pub fn count<T>(slice: &[T], f: impl Fn(&T) -> bool) -> usize {
    slice.iter().filter(|&v| f(v)).count()
}

/// Returns `true` if `value` is in `slice`.
pub fn contains<T: PartialEq>(slice: &[T], value: &T) -> bool {
    slice.contains(value)
}

/// Returns the index of the first element satisfying `f`.
pub fn index<T>(slice: &[T], f: impl Fn(&T) -> bool) -> Option<usize> {
    slice.iter().position(f)
}

/// Builds a predicate that is `true` for members of `values`.
///
/// ```
/// use zen::slice;
///
/// let kept = slice::filter(&[1, 2, 3, 3, 4, 5], slice::filter_in(vec![1, 2, 3]));
/// assert_eq!(kept, [1, 2, 3, 3]);
/// ```
pub fn filter_in<T: PartialEq>(values: Vec<T>) -> impl Fn(&T) -> bool {
    move |v| values.contains(v)
}

/// Builds a predicate that is `true` for non-members of `values`.
///
/// ```
/// use zen::slice;
///
/// let kept = slice::filter(&[1, 2, 3, 3, 4, 5], slice::filter_not_in(vec![1, 2, 3]));
/// assert_eq!(kept, [4, 5]);
/// ```
pub fn filter_not_in<T: PartialEq>(values: Vec<T>) -> impl Fn(&T) -> bool {
    move |v| !values.contains(v)
}
