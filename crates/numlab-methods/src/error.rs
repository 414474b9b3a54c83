//! Error types for iterative and direct solvers.

use numlab_core::NumericalError;
use thiserror::Error;

/// Errors that can occur while running a numerical method.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolverError {
    /// Newton step undefined because the derivative vanished.
    #[error("Derivative zero at x = {x}. No convergence.")]
    ZeroDerivative {
        /// Point at which `f'(x) == 0`
        x: f64,
    },

    /// Secant step undefined because two consecutive function values coincide.
    #[error("Zero denominator at iteration {iteration}. No convergence.")]
    ZeroDenominator {
        /// Zero-based iteration at which `f(x1) == f(x0)`
        iteration: usize,
    },

    /// Bracketing interval does not contain a sign change.
    #[error("f(a) and f(b) must have opposite signs: f({a}) = {fa}, f({b}) = {fb}")]
    NoSignChange {
        /// Left end of the bracket
        a: f64,
        /// Right end of the bracket
        b: f64,
        /// Function value at `a`
        fa: f64,
        /// Function value at `b`
        fb: f64,
    },

    /// Iteration budget exhausted.
    #[error("{method} did not converge within {max_iterations} iterations (last x = {last})")]
    MaxIterationsReached {
        /// Name of the method
        method: &'static str,
        /// Iteration budget
        max_iterations: usize,
        /// Last computed iterate
        last: f64,
    },

    /// Elimination hit an exactly zero pivot.
    #[error("Zero pivot in row {row}; elimination cannot continue")]
    ZeroPivot {
        /// Row (in elimination order) holding the zero pivot
        row: usize,
    },

    /// Not enough data points for the requested construction.
    #[error("Insufficient data: {reason}")]
    InsufficientData {
        /// What was missing
        reason: String,
    },

    /// Propagated parameter or domain error.
    #[error(transparent)]
    Numerical(#[from] NumericalError),
}

impl SolverError {
    /// Create a MaxIterationsReached error.
    pub fn max_iterations_reached(method: &'static str, max_iterations: usize, last: f64) -> Self {
        Self::MaxIterationsReached {
            method,
            max_iterations,
            last,
        }
    }

    /// Create an InsufficientData error.
    pub fn insufficient_data<S: Into<String>>(reason: S) -> Self {
        Self::InsufficientData {
            reason: reason.into(),
        }
    }
}

/// Result type alias for solver operations.
pub type SolverResult<T> = std::result::Result<T, SolverError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SolverError::ZeroDerivative { x: 0.0 };
        assert_eq!(err.to_string(), "Derivative zero at x = 0. No convergence.");

        let err = SolverError::max_iterations_reached("Newton's method", 100, 1.5);
        assert_eq!(
            err.to_string(),
            "Newton's method did not converge within 100 iterations (last x = 1.5)"
        );

        let err = SolverError::ZeroPivot { row: 0 };
        assert!(err.to_string().contains("row 0"));
    }

    #[test]
    fn test_numerical_error_propagation() {
        let inner = NumericalError::out_of_domain(3.0, 0.0, 2.0);
        let err: SolverError = inner.clone().into();
        assert!(matches!(err, SolverError::Numerical(_)));
        assert_eq!(err.to_string(), inner.to_string());
    }
}
