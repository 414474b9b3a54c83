//! Scalar abstraction over the two floating-point widths under study.
//!
//! Every routine in this crate is generic over [`Scalar`], so a computation
//! instantiated with `f32` is monomorphised into pure single-precision code
//! and never widened to `f64` behind the caller's back.

use num_traits::{Float, FromPrimitive};
use std::fmt::{Debug, Display, LowerExp};

/// Trait for the floating-point types examined by the demonstrations
/// (`f32` or `f64`).
pub trait Scalar:
    Float + FromPrimitive + Display + LowerExp + Debug + Default + Copy + Send + Sync + 'static
{
    /// Machine epsilon as published by the standard library.
    const EPSILON: Self;

    /// Number of significand bits, including the implicit leading bit.
    const MANTISSA_DIGITS: u32;

    /// C-family name of the type, used as a label in printed reports.
    const LABEL: &'static str;

    /// Convert an `f64` constant into this type.
    ///
    /// For `f32` the value is rounded to nearest, which is the same rounding
    /// a single-precision literal in source code receives.
    ///
    /// # Panics
    ///
    /// Never for `f32`/`f64`; the conversion only fails for exotic
    /// `FromPrimitive` implementations.
    fn constant(v: f64) -> Self {
        <Self as FromPrimitive>::from_f64(v).expect("Failed to convert from f64")
    }

    /// Widen to `f64` for reporting and comparisons against references.
    fn as_f64(self) -> f64 {
        num_traits::cast(self).expect("Failed to convert to f64")
    }
}

impl Scalar for f32 {
    const EPSILON: Self = f32::EPSILON;
    const MANTISSA_DIGITS: u32 = f32::MANTISSA_DIGITS;
    const LABEL: &'static str = "float";
}

impl Scalar for f64 {
    const EPSILON: Self = f64::EPSILON;
    const MANTISSA_DIGITS: u32 = f64::MANTISSA_DIGITS;
    const LABEL: &'static str = "double";
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_scalar_trait_f32() {
        assert_eq!(<f32 as Scalar>::EPSILON, f32::EPSILON);
        assert_eq!(<f32 as Scalar>::MANTISSA_DIGITS, 24);
        assert_eq!(<f32 as Scalar>::LABEL, "float");
    }

    #[test]
    fn test_scalar_trait_f64() {
        assert_eq!(<f64 as Scalar>::EPSILON, f64::EPSILON);
        assert_eq!(<f64 as Scalar>::MANTISSA_DIGITS, 53);
        assert_eq!(<f64 as Scalar>::LABEL, "double");
    }

    #[test]
    fn test_scalar_conversions() {
        let val_f32 = <f32 as Scalar>::constant(0.1);
        assert_eq!(val_f32, 0.1_f32);
        assert_relative_eq!(val_f32.as_f64(), 0.1, epsilon = 1e-8);
        assert_eq!(<f64 as Scalar>::constant(1e-8).as_f64(), 1e-8);
    }
}
