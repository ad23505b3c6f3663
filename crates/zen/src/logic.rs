//! Truthiness helpers based on a type's zero value.
//!
//! A value is "empty" when it equals `T::default()`: `0`, `""`, `false`, an
//! empty `Vec`, `None`.

/// Returns `true` if `value` equals the type's default.
pub fn empty<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}

/// Returns `true` if `value` differs from the type's default.
pub fn not_empty<T: Default + PartialEq>(value: &T) -> bool {
    !empty(value)
}

/// Returns `a` unless it is empty, otherwise `b`.
///
/// ```
/// use zen::logic;
///
/// assert_eq!(logic::or("", "fallback"), "fallback");
/// assert_eq!(logic::or(3, 7), 3);
/// ```
pub fn or<T: Default + PartialEq>(a: T, b: T) -> T {
    if empty(&a) { b } else { a }
}

/// Returns the first non-empty value, or the default when every value is
/// empty.
pub fn or_all<T, I>(values: I) -> T
where
    T: Default + PartialEq,
    I: IntoIterator<Item = T>,
{
    values.into_iter().find(|v| not_empty(v)).unwrap_or_default()
}

/// Ternary: `a` when `cond` holds, else `b`.
pub fn tr<T>(cond: bool, a: T, b: T) -> T {
    if cond { a } else { b }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emptiness_follows_default() {
        assert!(empty(&0));
        assert!(empty(&String::new()));
        assert!(empty(&Vec::<u8>::new()));
        assert!(empty(&None::<i32>));
        assert!(not_empty(&-1));
        assert!(not_empty(&Some(0)));
    }

    #[test]
    fn or_all_picks_first_non_empty() {
        assert_eq!(or_all(["", "", "b", "c"]), "b");
        assert_eq!(or_all([0, 0]), 0);
        assert_eq!(or_all(Vec::<i32>::new()), 0);
    }

    #[test]
    fn tr_selects_by_condition() {
        assert_eq!(tr(true, "yes", "no"), "yes");
        assert_eq!(tr(false, 1, 2), 2);
    }
}
