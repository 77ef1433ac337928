//! Numeric element types
//!
//! The number transforms are generic over [`Numeric`], which fixes the few
//! arithmetic operations they need. Sums are accumulated in a wide type
//! ([`Numeric::Sum`]): `i128` for every integer type, `f64` for floats.
//! Integer arithmetic saturates instead of wrapping.

use std::fmt::Display;

/// Element type of a number sequence
pub trait Numeric: Copy + PartialOrd + Display {
    /// Wide accumulator used for sums
    type Sum: Copy + Display;

    /// Additive identity
    const ZERO: Self;

    /// Additive identity of the accumulator
    const SUM_ZERO: Self::Sum;

    /// `self * 3`, saturating for integers
    fn tripled(self) -> Self;

    /// `acc + self` in the accumulator type
    fn accumulate(self, acc: Self::Sum) -> Self::Sum;

    /// Narrow an accumulated sum back to `Self`, saturating at the type bounds
    fn from_sum(sum: Self::Sum) -> Self;
}

macro_rules! impl_numeric_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl Numeric for $t {
                type Sum = i128;

                const ZERO: Self = 0;
                const SUM_ZERO: i128 = 0;

                #[inline]
                fn tripled(self) -> Self {
                    self.saturating_mul(3)
                }

                #[inline]
                fn accumulate(self, acc: i128) -> i128 {
                    acc.saturating_add(self as i128)
                }

                #[inline]
                fn from_sum(sum: i128) -> Self {
                    <$t>::try_from(sum).unwrap_or(if sum < 0 { <$t>::MIN } else { <$t>::MAX })
                }
            }
        )*
    };
}

impl_numeric_int!(i8, i16, i32, i64, i128, isize);

impl Numeric for f32 {
    type Sum = f64;

    const ZERO: Self = 0.0;
    const SUM_ZERO: f64 = 0.0;

    #[inline]
    fn tripled(self) -> Self {
        self * 3.0
    }

    #[inline]
    fn accumulate(self, acc: f64) -> f64 {
        acc + f64::from(self)
    }

    #[inline]
    fn from_sum(sum: f64) -> Self {
        sum as f32
    }
}

impl Numeric for f64 {
    type Sum = f64;

    const ZERO: Self = 0.0;
    const SUM_ZERO: f64 = 0.0;

    #[inline]
    fn tripled(self) -> Self {
        self * 3.0
    }

    #[inline]
    fn accumulate(self, acc: f64) -> f64 {
        acc + self
    }

    #[inline]
    fn from_sum(sum: f64) -> Self {
        sum
    }
}
