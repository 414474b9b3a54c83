//! Error types shared by the numerical routines.
//!
//! The precision demonstrations themselves cannot fail; these errors cover
//! parameter validation and the domain checks of the methods built on top.

use thiserror::Error;

/// Errors raised by numerical routines and their configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NumericalError {
    /// A configuration parameter is outside its admissible range.
    #[error("Invalid parameter `{parameter}`: {reason}")]
    InvalidParameter {
        /// Name of the offending parameter
        parameter: String,
        /// Why the value was rejected
        reason: String,
    },

    /// Dimension mismatch between operands.
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimensions
        expected: String,
        /// Actual dimensions
        actual: String,
    },

    /// Evaluation point lies outside the domain of the function.
    #[error("Value {value} is outside the domain [{lower}, {upper}]")]
    OutOfDomain {
        /// Requested evaluation point
        value: f64,
        /// Lower end of the domain
        lower: f64,
        /// Upper end of the domain
        upper: f64,
    },
}

impl NumericalError {
    /// Create an InvalidParameter error.
    pub fn invalid_parameter<S1, S2>(parameter: S1, reason: S2) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        Self::InvalidParameter {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }

    /// Create a DimensionMismatch error.
    pub fn dimension_mismatch<S1, S2>(expected: S1, actual: S2) -> Self
    where
        S1: std::fmt::Display,
        S2: std::fmt::Display,
    {
        Self::DimensionMismatch {
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }

    /// Create an OutOfDomain error.
    pub fn out_of_domain(value: f64, lower: f64, upper: f64) -> Self {
        Self::OutOfDomain {
            value,
            lower,
            upper,
        }
    }
}

/// Result type alias for operations that can produce NumericalError.
pub type Result<T> = std::result::Result<T, NumericalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = NumericalError::invalid_parameter("threshold", "must be positive");
        assert!(matches!(err, NumericalError::InvalidParameter { .. }));
        assert_eq!(
            err.to_string(),
            "Invalid parameter `threshold`: must be positive"
        );

        let err = NumericalError::dimension_mismatch("3x3", "3x2");
        assert_eq!(err.to_string(), "Dimension mismatch: expected 3x3, got 3x2");
    }

    #[test]
    fn test_out_of_domain_display() {
        let err = NumericalError::out_of_domain(3.0, 0.0, 2.25);
        assert_eq!(
            err.to_string(),
            "Value 3 is outside the domain [0, 2.25]"
        );
    }
}
