use core::fmt;

/// Primitive numeric types usable with [`crate::agg`] and [`crate::mathx`].
///
/// Integer operations are checked: overflow and division by zero surface as
/// `None` instead of panicking. Float operations never fail and follow IEEE
/// semantics (`1.0 / 0.0` is infinity).
pub trait Number: Copy + PartialOrd + fmt::Debug + Send + Sync + 'static {
    /// The additive identity.
    const ZERO: Self;

    /// `true` for integer types.
    const INTEGRAL: bool;

    fn checked_add(self, rhs: Self) -> Option<Self>;

    fn checked_sub(self, rhs: Self) -> Option<Self>;

    fn checked_mul(self, rhs: Self) -> Option<Self>;

    /// Divides `self` by `rhs`. For integers this is `None` on a zero divisor
    /// or on `MIN / -1`.
    fn checked_div(self, rhs: Self) -> Option<Self>;

    fn is_zero(self) -> bool;

    /// Converts an element count into `Self`, used as an averaging divisor.
    fn from_count(count: usize) -> Option<Self>;

    /// Accumulator type for sums that may exceed `Self`. The 128-bit integers
    /// and `f64` are their own accumulators.
    type Wide: Number;

    fn widen(self) -> Self::Wide;

    /// Converts back from the accumulator, `None` when out of range.
    fn narrow(wide: Self::Wide) -> Option<Self>;
}

macro_rules! impl_integer {
    ($($ty:ty => $wide:ty),* $(,)?) => {
        $(
            impl Number for $ty {
                const ZERO: Self = 0;
                const INTEGRAL: bool = true;

                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$ty>::checked_add(self, rhs)
                }

                fn checked_sub(self, rhs: Self) -> Option<Self> {
                    <$ty>::checked_sub(self, rhs)
                }

                fn checked_mul(self, rhs: Self) -> Option<Self> {
                    <$ty>::checked_mul(self, rhs)
                }

                fn checked_div(self, rhs: Self) -> Option<Self> {
                    <$ty>::checked_div(self, rhs)
                }

                fn is_zero(self) -> bool {
                    self == 0
                }

                fn from_count(count: usize) -> Option<Self> {
                    <$ty>::try_from(count).ok()
                }

                type Wide = $wide;

                #[allow(clippy::cast_lossless, clippy::unnecessary_cast)]
                fn widen(self) -> $wide {
                    self as $wide
                }

                fn narrow(wide: $wide) -> Option<Self> {
                    <$ty>::try_from(wide).ok()
                }
            }
        )*
    };
}

macro_rules! impl_float {
    ($($ty:ty => $wide:ty),* $(,)?) => {
        $(
            impl Number for $ty {
                const ZERO: Self = 0.0;
                const INTEGRAL: bool = false;

                fn checked_add(self, rhs: Self) -> Option<Self> {
                    Some(self + rhs)
                }

                fn checked_sub(self, rhs: Self) -> Option<Self> {
                    Some(self - rhs)
                }

                fn checked_mul(self, rhs: Self) -> Option<Self> {
                    Some(self * rhs)
                }

                fn checked_div(self, rhs: Self) -> Option<Self> {
                    Some(self / rhs)
                }

                fn is_zero(self) -> bool {
                    self == 0.0
                }

                #[allow(clippy::cast_precision_loss)]
                fn from_count(count: usize) -> Option<Self> {
                    Some(count as $ty)
                }

                type Wide = $wide;

                #[allow(clippy::cast_lossless, clippy::unnecessary_cast)]
                fn widen(self) -> $wide {
                    self as $wide
                }

                #[allow(clippy::cast_possible_truncation, clippy::unnecessary_cast)]
                fn narrow(wide: $wide) -> Option<Self> {
                    Some(wide as $ty)
                }
            }
        )*
    };
}

impl_integer!(
    i8 => i64,
    i16 => i64,
    i32 => i64,
    i64 => i128,
    i128 => i128,
    isize => i128,
    u8 => u64,
    u16 => u64,
    u32 => u64,
    u64 => u128,
    u128 => u128,
    usize => u128,
);
impl_float!(f32 => f64, f64 => f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_ops_are_checked() {
        assert_eq!(Number::checked_add(i8::MAX, 1), None);
        assert_eq!(Number::checked_sub(0_u32, 1), None);
        assert_eq!(Number::checked_div(7_i64, 0), None);
        assert_eq!(Number::checked_div(7_i64, 2), Some(3));
        assert_eq!(<u8 as Number>::from_count(300), None);
    }

    #[test]
    fn narrow_rejects_out_of_range() {
        assert_eq!(100_i8.widen() + 100, 200_i64);
        assert_eq!(<i8 as Number>::narrow(200), None);
        assert_eq!(<u64 as Number>::narrow(7), Some(7));
    }

    #[test]
    fn float_ops_follow_ieee() {
        assert_eq!(Number::checked_div(1.0_f64, 0.0), Some(f64::INFINITY));
        assert_eq!(<f32 as Number>::from_count(4), Some(4.0));
        assert!(!<f64 as Number>::INTEGRAL);
    }
}
