//! Aggregations over slices: minimum, maximum and average.
//!
//! All functions return `None` for an empty slice.
//!
//! ```
//! use zen::agg;
//!
//! assert_eq!(agg::max(&[1, 2, 3]), Some(3));
//! assert_eq!(agg::min(&[2.3, 54.3, 3.5]), Some(2.3));
//! assert_eq!(agg::avg(&[1, 2, 3]), Some(2));
//! ```

use crate::Number;

/// Returns the smallest value. On ties the first occurrence wins.
pub fn min<T: PartialOrd + Clone>(vals: &[T]) -> Option<T> {
    let (first, rest) = vals.split_first()?;
    let mut min = first;
    for v in rest {
        if v < min {
            min = v;
        }
    }
    Some(min.clone())
}

/// Returns the largest value. On ties the first occurrence wins.
pub fn max<T: PartialOrd + Clone>(vals: &[T]) -> Option<T> {
    let (first, rest) = vals.split_first()?;
    let mut max = first;
    for v in rest {
        if v > max {
            max = v;
        }
    }
    Some(max.clone())
}

/// Returns the arithmetic mean.
///
/// The sum is taken in [`Number::Wide`], so `avg(&[100_i8, 100])` is `100`.
/// Integer averages truncate toward zero, like integer division. Returns
/// `None` when the slice is empty or when the sum overflows even the wider
/// accumulator (only possible for 64- and 128-bit integers).
pub fn avg<T: Number>(vals: &[T]) -> Option<T> {
    if vals.is_empty() {
        return None;
    }
    let sum = vals
        .iter()
        .try_fold(<T::Wide as Number>::ZERO, |acc, &v| acc.checked_add(v.widen()))?;
    T::narrow(sum.checked_div(<T::Wide as Number>::from_count(vals.len())?)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_and_max_pick_extremes() {
        assert_eq!(min(&[3, 1, 2]), Some(1));
        assert_eq!(max(&[3, 1, 2]), Some(3));
        assert_eq!(max(&[2.3, 54.3, 3.5]), Some(54.3));
        assert_eq!(min(&["b", "a", "c"]), Some("a"));
    }

    #[test]
    fn empty_input_has_no_aggregate() {
        assert_eq!(min::<i32>(&[]), None);
        assert_eq!(max::<i32>(&[]), None);
        assert_eq!(avg::<f64>(&[]), None);
    }

    #[test]
    fn avg_of_single_value_is_the_value() {
        assert_eq!(avg(&[5]), Some(5));
    }

    #[test]
    fn avg_truncates_for_integers() {
        assert_eq!(avg(&[1, 2]), Some(1));
        assert_eq!(avg(&[1.0, 2.0]), Some(1.5));
    }

    #[test]
    fn avg_sums_in_a_wider_type() {
        assert_eq!(avg(&[100_i8, 100]), Some(100));
        assert_eq!(avg(&[i8::MAX, 1]), Some(64));
        assert_eq!(avg(&[u8::MAX; 300]), Some(u8::MAX));
        assert_eq!(avg(&[i64::MIN, i64::MIN]), Some(i64::MIN));
        assert_eq!(avg(&[f32::MAX, f32::MAX]), Some(f32::MAX));
    }

    #[test]
    fn avg_reports_overflow_of_the_accumulator_as_none() {
        assert_eq!(avg(&[u128::MAX, 1]), None);
    }

    #[test]
    fn ties_keep_first_occurrence() {
        #[derive(Clone, Debug, PartialEq)]
        struct Tagged(i32, &'static str);
        impl PartialOrd for Tagged {
            fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
                self.0.partial_cmp(&other.0)
            }
        }

        let vals = [Tagged(1, "a"), Tagged(1, "b")];
        assert_eq!(min(&vals), Some(Tagged(1, "a")));
        assert_eq!(max(&vals), Some(Tagged(1, "a")));
    }
}
