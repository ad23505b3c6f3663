use core::fmt;

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, Visitor},
};

/// An integer that deserializes leniently.
///
/// Accepts JSON integers, floats (truncated toward zero) and `null` (as `0`).
/// Useful for payloads produced by systems that emit every number as a float.
///
/// ```
/// use zen::jsonx::Int;
///
/// let v: Vec<Int> = serde_json::from_str("[1, 2.9, null]").unwrap();
/// assert_eq!(v, [Int(1), Int(2), Int(0)]);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Int(pub i64);

impl From<i64> for Int {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<Int> for i64 {
    fn from(value: Int) -> Self {
        value.0
    }
}

impl fmt::Display for Int {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl Serialize for Int {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_i64(self.0)
    }
}

impl<'de> Deserialize<'de> for Int {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_any(IntVisitor)
    }
}

struct IntVisitor;

impl Visitor<'_> for IntVisitor {
    type Value = Int;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number or null")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Int, E> {
        Ok(Int(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Int, E> {
        i64::try_from(v)
            .map(Int)
            .map_err(|_| E::custom(format_args!("integer {v} does not fit into i64")))
    }

    #[allow(clippy::cast_possible_truncation)]
    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Int, E> {
        if !v.is_finite() {
            return Err(E::custom(format_args!("{v} is not a finite number")));
        }
        // Saturating cast; the fractional part is dropped.
        Ok(Int(v as i64))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Int, E> {
        Ok(Int(0))
    }

    fn visit_none<E: de::Error>(self) -> Result<Int, E> {
        Ok(Int(0))
    }
}
