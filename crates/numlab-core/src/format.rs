//! Fixed-significance rendering of floating-point values.
//!
//! Reports print every value with [`REPORT_DIGITS`] significant digits in the
//! style of C's `%g` conversion: fixed notation when the decimal exponent is
//! in `[-4, digits)`, scientific notation otherwise, trailing zeros dropped,
//! and a signed exponent of at least two digits (`1.5e-08`).
//!
//! Rust's default `Display` prints the shortest round-tripping string, which
//! hides exactly the trailing digits these reports are meant to expose.

use crate::types::Scalar;
use std::fmt;

/// Number of significant digits used by all printed reports.
pub const REPORT_DIGITS: usize = 20;

/// Display adapter printing a value with a fixed number of significant digits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Significant<T> {
    value: T,
    digits: usize,
}

impl<T: Scalar> Significant<T> {
    /// Wrap `value`, printing `digits` significant digits (at least one).
    pub fn new(value: T, digits: usize) -> Self {
        Self {
            value,
            digits: digits.max(1),
        }
    }

    /// Wrap `value` with the report precision.
    pub fn report(value: T) -> Self {
        Self::new(value, REPORT_DIGITS)
    }
}

impl<T: Scalar> fmt::Display for Significant<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.value;
        if value.is_nan() {
            return f.write_str("nan");
        }
        if value.is_infinite() {
            return f.write_str(if value.is_sign_negative() { "-inf" } else { "inf" });
        }
        if value.is_zero() {
            return f.write_str(if value.is_sign_negative() { "-0" } else { "0" });
        }

        // The exponent is taken after rounding to `digits`, so 9.99.. -> 1e+01 is handled.
        let scientific = format!("{:.*e}", self.digits - 1, value);
        let (mantissa, exponent) = scientific.split_once('e').ok_or(fmt::Error)?;
        let exponent: i32 = exponent.parse().map_err(|_| fmt::Error)?;

        if exponent < -4 || exponent >= self.digits as i32 {
            let sign = if exponent < 0 { '-' } else { '+' };
            write!(
                f,
                "{}e{}{:02}",
                trim_fraction(mantissa),
                sign,
                exponent.unsigned_abs()
            )
        } else {
            let decimals = (self.digits as i32 - 1 - exponent) as usize;
            let fixed = format!("{:.*}", decimals, value);
            f.write_str(trim_fraction(&fixed))
        }
    }
}

/// Shorthand for [`Significant::report`].
pub fn sig<T: Scalar>(value: T) -> Significant<T> {
    Significant::report(value)
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_notation_shows_binary_expansion() {
        assert_eq!(sig(0.1_f64).to_string(), "0.10000000000000000555");
        assert_eq!(sig(1.0_f64).to_string(), "1");
        assert_eq!(sig(0.5_f64).to_string(), "0.5");
    }

    #[test]
    fn test_scientific_notation_for_small_values() {
        assert_eq!(sig(f64::EPSILON).to_string(), "2.2204460492503130808e-16");
        assert_eq!(sig(f32::EPSILON).to_string(), "1.1920928955078125e-07");
        assert_eq!(sig(1e-5_f64).to_string(), "1.0000000000000000818e-05");
    }

    #[test]
    fn test_exponent_boundaries() {
        // 1e-4 still uses fixed notation, anything smaller switches.
        assert_eq!(Significant::new(1e-4_f64, 3).to_string(), "0.0001");
        assert_eq!(Significant::new(1e-5_f64, 3).to_string(), "1e-05");
        assert_eq!(Significant::new(123456.0_f64, 3).to_string(), "1.23e+05");
        assert_eq!(Significant::new(123.0_f64, 3).to_string(), "123");
    }

    #[test]
    fn test_rounding_carries_into_exponent() {
        assert_eq!(Significant::new(9.99_f64, 2).to_string(), "10");
        assert_eq!(Significant::new(99.9_f64, 2).to_string(), "1e+02");
    }

    #[test]
    fn test_special_values() {
        assert_eq!(sig(0.0_f64).to_string(), "0");
        assert_eq!(sig(-0.0_f64).to_string(), "-0");
        assert_eq!(sig(f64::NAN).to_string(), "nan");
        assert_eq!(sig(f32::NEG_INFINITY).to_string(), "-inf");
        assert_eq!(sig(-0.25_f32).to_string(), "-0.25");
    }
}
