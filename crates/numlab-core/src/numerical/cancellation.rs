//! Two algebraically equal forms of `sqrt(x² + 1) − 1`.
//!
//! The subtractive form `f(x) = sqrt(x² + 1) − 1` subtracts two nearly equal
//! numbers once `x` is small and loses its significant digits. Multiplying by
//! the conjugate gives `g(x) = x² / (sqrt(x² + 1) + 1)`, which only adds
//! positive quantities. Both are evaluated at `x = b^(-k)` for a fixed base.

use crate::error::{NumericalError, Result};
use crate::format::sig;
use crate::types::Scalar;
use std::fmt;
use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest exponent `k` that `powi` accepts as `-k`.
pub const MAX_EXPONENT: u32 = i32::MAX as u32;

/// Sampling grid for the comparison: `x = base^(-k)` for `k` in `exponents`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CancellationConfig {
    /// Base of the geometric sequence of inputs
    pub base: u32,
    /// Exponents `k`, each producing the input `base^(-k)`
    pub exponents: Range<u32>,
}

impl Default for CancellationConfig {
    fn default() -> Self {
        Self {
            base: 8,
            exponents: 0..16,
        }
    }
}

impl CancellationConfig {
    /// Check that the base is at least 2 and the exponent range is non-empty
    /// and within [`MAX_EXPONENT`].
    pub fn validate(&self) -> Result<()> {
        if self.base < 2 {
            return Err(NumericalError::invalid_parameter(
                "base",
                format!("must be at least 2, got {}", self.base),
            ));
        }
        if self.exponents.is_empty() {
            return Err(NumericalError::invalid_parameter(
                "exponents",
                "range must contain at least one exponent",
            ));
        }
        if self.exponents.end - 1 > MAX_EXPONENT {
            return Err(NumericalError::invalid_parameter(
                "exponents",
                format!(
                    "exponents must not exceed {}, got {}",
                    MAX_EXPONENT,
                    self.exponents.end - 1
                ),
            ));
        }
        Ok(())
    }
}

/// Both forms evaluated at one input.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CancellationSample<T> {
    /// Base `b` of the input
    pub base: u32,
    /// Exponent `k` of the input
    pub exponent: u32,
    /// The input `b^(-k)`
    pub x: T,
    /// `sqrt(x² + 1) − 1`
    pub subtractive: T,
    /// `x² / (sqrt(x² + 1) + 1)`
    pub rationalized: T,
}

/// `f(x) = sqrt(x² + 1) − 1`.
pub fn subtractive_form<T: Scalar>(x: T) -> T {
    (x * x + T::one()).sqrt() - T::one()
}

/// `g(x) = x² / (sqrt(x² + 1) + 1)`.
pub fn rationalized_form<T: Scalar>(x: T) -> T {
    let x2 = x * x;
    x2 / ((x2 + T::one()).sqrt() + T::one())
}

/// Evaluate both forms at `base^(-exponent)`.
///
/// Exponents above [`MAX_EXPONENT`] are clamped to it; for any base of at
/// least 2 the input has long underflowed to zero by then.
pub fn cancellation_sample<T: Scalar>(base: u32, exponent: u32) -> CancellationSample<T> {
    let k = i32::try_from(exponent).unwrap_or(i32::MAX);
    let x = T::constant(f64::from(base)).powi(-k);
    CancellationSample {
        base,
        exponent,
        x,
        subtractive: subtractive_form(x),
        rationalized: rationalized_form(x),
    }
}

/// Evaluate both forms over the whole grid, in order of increasing `k`.
pub fn cancellation_table<T: Scalar>(
    config: &CancellationConfig,
) -> Result<Vec<CancellationSample<T>>> {
    config.validate()?;
    Ok(config
        .exponents
        .clone()
        .map(|k| cancellation_sample(config.base, k))
        .collect())
}

impl<T: Scalar> fmt::Display for CancellationSample<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "x = {}^(-{})", self.base, self.exponent)?;
        writeln!(f, "  f(x) = {}", sig(self.subtractive))?;
        write!(f, "  g(x) = {}", sig(self.rationalized))
    }
}
