use core::fmt;
use std::hash::{Hash, Hasher};

use num_cmp::NumCmp;

/// Native numeric payload of a number literal.
///
/// Equality is mathematical: `PositiveInteger(1)` equals `Float(1.0)`.
#[derive(Debug, Copy, Clone)]
pub enum Number {
    PositiveInteger(u64),
    NegativeInteger(i64),
    Float(f64),
}

impl Number {
    /// Build a number from a float, rejecting `NaN` and infinities.
    #[must_use]
    pub fn from_f64(value: f64) -> Option<Number> {
        value.is_finite().then_some(Number::Float(value))
    }

    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match *self {
            #[allow(clippy::cast_precision_loss)]
            Number::PositiveInteger(u) => u as f64,
            #[allow(clippy::cast_precision_loss)]
            Number::NegativeInteger(i) => i as f64,
            Number::Float(f) => f,
        }
    }

    /// Exact `i64` value, if the number is an integer literal that fits.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Number::PositiveInteger(u) => i64::try_from(u).ok(),
            Number::NegativeInteger(i) => Some(i),
            Number::Float(_) => None,
        }
    }

    /// Exact `u64` value, if the number is a non-negative integer literal.
    #[must_use]
    pub fn as_u64(&self) -> Option<u64> {
        match *self {
            Number::PositiveInteger(u) => Some(u),
            Number::NegativeInteger(i) => u64::try_from(i).ok(),
            Number::Float(_) => None,
        }
    }

    #[must_use]
    pub fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// Integers are always finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        match *self {
            Number::Float(f) => f.is_finite(),
            Number::PositiveInteger(_) | Number::NegativeInteger(_) => true,
        }
    }

    /// The value as an `i128` when it is mathematically an integer in the `i64..=u64` range.
    #[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
    fn integral(self) -> Option<i128> {
        match self {
            Number::PositiveInteger(u) => Some(i128::from(u)),
            Number::NegativeInteger(i) => Some(i128::from(i)),
            Number::Float(f) => {
                // Both bounds are powers of two and therefore exact in `f64`
                if f.trunc() == f && f >= -(2f64.powi(63)) && f < 2f64.powi(64) {
                    Some(f as i128)
                } else {
                    None
                }
            }
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::PositiveInteger(n) => f.write_str(itoa::Buffer::new().format(*n)),
            Number::NegativeInteger(n) => f.write_str(itoa::Buffer::new().format(*n)),
            // `Debug` keeps the fractional part (`1.0`), which `Display` drops
            Number::Float(n) => write!(f, "{n:?}"),
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (*self, *other) {
            (Number::PositiveInteger(a), Number::PositiveInteger(b)) => a == b,
            (Number::NegativeInteger(a), Number::NegativeInteger(b)) => a == b,
            // Bitwise match keeps `Eq` reflexive for `NaN`
            #[allow(clippy::float_cmp)]
            (Number::Float(a), Number::Float(b)) => a.to_bits() == b.to_bits() || a == b,
            (Number::PositiveInteger(a), Number::NegativeInteger(b))
            | (Number::NegativeInteger(b), Number::PositiveInteger(a)) => NumCmp::num_eq(a, b),
            (Number::PositiveInteger(a), Number::Float(b))
            | (Number::Float(b), Number::PositiveInteger(a)) => NumCmp::num_eq(a, b),
            (Number::NegativeInteger(a), Number::Float(b))
            | (Number::Float(b), Number::NegativeInteger(a)) => NumCmp::num_eq(a, b),
        }
    }
}

impl Eq for Number {}

impl Hash for Number {
    fn hash<H: Hasher>(&self, h: &mut H) {
        if let Some(integral) = self.integral() {
            integral.hash(h);
        } else {
            // Non-integral floats never equal an integer and `-0.0` is integral,
            // so raw bits are consistent with `eq` here
            self.as_f64().to_bits().hash(h);
        }
    }
}

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        Number::PositiveInteger(value)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        if let Ok(u) = u64::try_from(value) {
            Number::PositiveInteger(u)
        } else {
            Number::NegativeInteger(value)
        }
    }
}

impl From<u32> for Number {
    fn from(value: u32) -> Self {
        Number::PositiveInteger(u64::from(value))
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::from(i64::from(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::RandomState;
    use std::hash::BuildHasher;
    use test_case::test_case;

    fn hash(number: Number) -> u64 {
        BuildHasher::hash_one(&RandomState::with_seeds(1, 2, 3, 4), number)
    }

    #[test_case(Number::PositiveInteger(1), Number::Float(1.0))]
    #[test_case(Number::NegativeInteger(-5), Number::Float(-5.0))]
    #[test_case(Number::PositiveInteger(0), Number::Float(-0.0))]
    #[test_case(Number::Float(0.0), Number::Float(-0.0))]
    #[test_case(Number::PositiveInteger(1 << 63), Number::Float(9_223_372_036_854_775_808.0))]
    #[test_case(Number::from(-3i64), Number::NegativeInteger(-3))]
    #[test_case(Number::from(3i64), Number::PositiveInteger(3))]
    fn equal_values_hash_alike(left: Number, right: Number) {
        assert_eq!(left, right);
        assert_eq!(right, left);
        assert_eq!(hash(left), hash(right));
    }

    #[test_case(Number::PositiveInteger(1), Number::Float(1.5))]
    #[test_case(Number::PositiveInteger(1), Number::NegativeInteger(-1))]
    #[test_case(Number::PositiveInteger((1 << 53) + 1), Number::Float(9_007_199_254_740_992.0))]
    #[test_case(Number::Float(0.1), Number::Float(0.2))]
    fn different_values(left: Number, right: Number) {
        assert_ne!(left, right);
        assert_ne!(right, left);
    }

    #[test_case(Number::PositiveInteger(42), "42")]
    #[test_case(Number::NegativeInteger(-42), "-42")]
    #[test_case(Number::Float(1.0), "1.0")]
    #[test_case(Number::Float(3.25), "3.25")]
    #[test_case(Number::Float(-0.5), "-0.5")]
    #[test_case(Number::Float(1e300), "1e300")]
    fn display(number: Number, expected: &str) {
        assert_eq!(number.to_string(), expected);
    }

    #[test]
    fn nan_equals_itself() {
        let nan = Number::Float(f64::NAN);
        assert_eq!(nan, nan);
        assert_eq!(hash(nan), hash(nan));
        assert!(!nan.is_finite());
        assert!(Number::NegativeInteger(-1).is_finite());
    }

    #[test]
    fn non_finite_floats_are_rejected() {
        assert!(Number::from_f64(f64::NAN).is_none());
        assert!(Number::from_f64(f64::INFINITY).is_none());
        assert!(Number::from_f64(f64::NEG_INFINITY).is_none());
        assert!(Number::from_f64(2.5).is_some());
    }

    #[test_case(Number::PositiveInteger(u64::MAX), None, Some(u64::MAX))]
    #[test_case(Number::NegativeInteger(-1), Some(-1), None)]
    #[test_case(Number::PositiveInteger(7), Some(7), Some(7))]
    #[test_case(Number::Float(7.0), None, None)]
    fn integer_narrowing(number: Number, as_i64: Option<i64>, as_u64: Option<u64>) {
        assert_eq!(number.as_i64(), as_i64);
        assert_eq!(number.as_u64(), as_u64);
    }
}
