//! Scalar root finding: Newton, secant and bisection.
//!
//! All three methods stop as soon as either the step is shorter than
//! `delta` or the residual `|f(x)|` is below `epsilon`.

use crate::callback::IterationCallback;
use crate::error::{SolverError, SolverResult};
use numlab_core::{NumericalError, Scalar};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Stopping rules shared by the root finders.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RootFindingParams<T> {
    /// Converged when the step `|x_{n+1} − x_n|` is below this
    pub delta: T,
    /// Converged when the residual `|f(x_{n+1})|` is below this
    pub epsilon: T,
    /// Maximum number of iterations
    pub max_iterations: usize,
}

impl<T: Scalar> RootFindingParams<T> {
    /// Defaults for Newton's method: `delta = epsilon = 1e-7`, 100 iterations.
    pub fn newton() -> Self {
        Self {
            delta: T::constant(1e-7),
            epsilon: T::constant(1e-7),
            max_iterations: 100,
        }
    }

    /// Defaults for the secant method (same as Newton).
    pub fn secant() -> Self {
        Self::newton()
    }

    /// Defaults for bisection: `delta = epsilon = 1e-6`, 100 iterations.
    pub fn bisection() -> Self {
        Self {
            delta: T::constant(1e-6),
            epsilon: T::constant(1e-6),
            max_iterations: 100,
        }
    }

    /// Check that tolerances are non-negative and at least one iteration is allowed.
    pub fn validate(&self) -> Result<(), NumericalError> {
        if !(self.delta >= T::zero()) {
            return Err(NumericalError::invalid_parameter(
                "delta",
                format!("must be non-negative, got {}", self.delta),
            ));
        }
        if !(self.epsilon >= T::zero()) {
            return Err(NumericalError::invalid_parameter(
                "epsilon",
                format!("must be non-negative, got {}", self.epsilon),
            ));
        }
        if self.max_iterations == 0 {
            return Err(NumericalError::invalid_parameter(
                "max_iterations",
                "at least one iteration is required",
            ));
        }
        Ok(())
    }

    fn converged(&self, step: T, residual: T) -> bool {
        step.abs() < self.delta || residual.abs() < self.epsilon
    }
}

impl<T: Scalar> Default for RootFindingParams<T> {
    fn default() -> Self {
        Self::newton()
    }
}

/// Approximate root and the number of iterations that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RootReport<T> {
    /// Final iterate
    pub root: T,
    /// Iterations performed
    pub iterations: usize,
}

/// Newton's method `x ← x − f(x)/f'(x)` starting from `x0`.
///
/// # Errors
///
/// - [`SolverError::ZeroDerivative`] if `f'` vanishes at an iterate.
/// - [`SolverError::MaxIterationsReached`] if the stopping rules are not met
///   within `params.max_iterations` steps.
pub fn newton<T, F, D, C>(
    f: F,
    df: D,
    x0: T,
    params: &RootFindingParams<T>,
    callback: &mut C,
) -> SolverResult<RootReport<T>>
where
    T: Scalar,
    F: Fn(T) -> T,
    D: Fn(T) -> T,
    C: IterationCallback<T> + ?Sized,
{
    params.validate()?;

    let mut x = x0;
    for iteration in 1..=params.max_iterations {
        let slope = df(x);
        if slope == T::zero() {
            return Err(SolverError::ZeroDerivative { x: x.as_f64() });
        }

        let next = x - f(x) / slope;
        callback.on_iteration(iteration, next);

        if params.converged(next - x, f(next)) {
            log::debug!("Newton converged after {} iterations", iteration);
            return Ok(RootReport {
                root: next,
                iterations: iteration,
            });
        }
        x = next;
    }

    Err(SolverError::max_iterations_reached(
        "Newton's method",
        params.max_iterations,
        x.as_f64(),
    ))
}

/// Secant method through the two most recent iterates, starting from `x0`, `x1`.
///
/// # Errors
///
/// - [`SolverError::ZeroDenominator`] if two consecutive values of `f` coincide.
/// - [`SolverError::MaxIterationsReached`] on budget exhaustion.
pub fn secant<T, F, C>(
    f: F,
    x0: T,
    x1: T,
    params: &RootFindingParams<T>,
    callback: &mut C,
) -> SolverResult<RootReport<T>>
where
    T: Scalar,
    F: Fn(T) -> T,
    C: IterationCallback<T> + ?Sized,
{
    params.validate()?;

    let (mut prev, mut x) = (x0, x1);
    for iteration in 1..=params.max_iterations {
        let f_prev = f(prev);
        let f_x = f(x);
        if f_x - f_prev == T::zero() {
            return Err(SolverError::ZeroDenominator {
                iteration: iteration - 1,
            });
        }

        let next = x - f_x * (x - prev) / (f_x - f_prev);
        callback.on_iteration(iteration, next);

        if params.converged(next - x, f(next)) {
            log::debug!("Secant converged after {} iterations", iteration);
            return Ok(RootReport {
                root: next,
                iterations: iteration,
            });
        }
        prev = x;
        x = next;
    }

    Err(SolverError::max_iterations_reached(
        "Secant method",
        params.max_iterations,
        x.as_f64(),
    ))
}

/// Bisection on `[a, b]`, which must bracket a sign change of `f`.
///
/// Each iteration halves the half-width `e` and probes `c = a + e`; the left
/// end moves to `c` when the sign change lies to its right.
///
/// # Errors
///
/// - [`SolverError::NoSignChange`] if `f(a)` and `f(b)` share a sign.
/// - [`SolverError::MaxIterationsReached`] on budget exhaustion.
pub fn bisection<T, F, C>(
    f: F,
    a: T,
    b: T,
    params: &RootFindingParams<T>,
    callback: &mut C,
) -> SolverResult<RootReport<T>>
where
    T: Scalar,
    F: Fn(T) -> T,
    C: IterationCallback<T> + ?Sized,
{
    params.validate()?;

    let mut left = a;
    let mut f_left = f(a);
    let f_right = f(b);
    if sign(f_left) == sign(f_right) {
        return Err(SolverError::NoSignChange {
            a: a.as_f64(),
            b: b.as_f64(),
            fa: f_left.as_f64(),
            fb: f_right.as_f64(),
        });
    }

    let two = T::one() + T::one();
    let mut half_width = b - a;
    let mut midpoint = left;
    for iteration in 1..=params.max_iterations {
        half_width = half_width / two;
        midpoint = left + half_width;
        let f_mid = f(midpoint);
        callback.on_iteration(iteration, midpoint);

        if params.converged(half_width, f_mid) {
            log::debug!("Bisection converged after {} iterations", iteration);
            return Ok(RootReport {
                root: midpoint,
                iterations: iteration,
            });
        }

        // The right end is implied by `left + half_width`.
        if sign(f_left) == sign(f_mid) {
            left = midpoint;
            f_left = f_mid;
        }
    }

    Err(SolverError::max_iterations_reached(
        "Bisection method",
        params.max_iterations,
        midpoint.as_f64(),
    ))
}

fn sign<T: Scalar>(value: T) -> i8 {
    if value > T::zero() {
        1
    } else if value < T::zero() {
        -1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::callback::{IterationHistory, NoOpCallback};
    use approx::assert_relative_eq;

    fn f(x: f64) -> f64 {
        x * x - 2.0
    }

    fn df(x: f64) -> f64 {
        2.0 * x
    }

    #[test]
    fn test_newton_sqrt_two() {
        let mut history = IterationHistory::default();
        let report = newton(f, df, 1.0, &RootFindingParams::newton(), &mut history).unwrap();

        assert_eq!(report.iterations, 4);
        assert_relative_eq!(report.root, 2f64.sqrt(), epsilon = 1e-12);
        assert_eq!(history.iterates[0], 1.5);
        assert_eq!(history.iterates.len(), 4);
    }

    #[test]
    fn test_newton_zero_derivative() {
        let err = newton(f, df, 0.0, &RootFindingParams::newton(), &mut NoOpCallback).unwrap_err();
        assert_eq!(err, SolverError::ZeroDerivative { x: 0.0 });
    }

    #[test]
    fn test_newton_budget_exhausted() {
        // x² + 1 has no real root; the iterates wander forever.
        let params = RootFindingParams {
            max_iterations: 5,
            ..RootFindingParams::newton()
        };
        let err = newton(|x: f64| x * x + 1.0, df, 0.5, &params, &mut NoOpCallback).unwrap_err();
        assert!(matches!(
            err,
            SolverError::MaxIterationsReached {
                max_iterations: 5,
                ..
            }
        ));
    }

    #[test]
    fn test_secant_sqrt_two() {
        let mut history = IterationHistory::default();
        let report = secant(f, 1.0, 2.0, &RootFindingParams::secant(), &mut history).unwrap();

        assert_eq!(report.iterations, 5);
        assert_relative_eq!(report.root, 2f64.sqrt(), epsilon = 1e-9);
        assert_relative_eq!(history.iterates[0], 4.0 / 3.0, epsilon = 1e-15);
    }

    #[test]
    fn test_secant_flat_function() {
        let err = secant(|_x: f64| 3.0, 1.0, 2.0, &RootFindingParams::secant(), &mut NoOpCallback)
            .unwrap_err();
        assert_eq!(err, SolverError::ZeroDenominator { iteration: 0 });
    }

    #[test]
    fn test_bisection_sqrt_two() {
        let report = bisection(f, 1.0, 2.0, &RootFindingParams::bisection(), &mut NoOpCallback)
            .unwrap();

        assert_eq!(report.iterations, 20);
        assert_relative_eq!(report.root, 2f64.sqrt(), epsilon = 1e-6);
    }

    #[test]
    fn test_bisection_requires_bracket() {
        let err = bisection(f, 2.0, 3.0, &RootFindingParams::bisection(), &mut NoOpCallback)
            .unwrap_err();
        assert!(matches!(err, SolverError::NoSignChange { .. }));
    }

    #[test]
    fn test_single_precision_newton() {
        let params = RootFindingParams::<f32>::newton();
        let report = newton(
            |x: f32| x * x - 2.0,
            |x: f32| 2.0 * x,
            1.0_f32,
            &params,
            &mut NoOpCallback,
        )
        .unwrap();
        assert_relative_eq!(report.root, 2f32.sqrt(), epsilon = 1e-6);
    }

    #[test]
    fn test_invalid_params() {
        let params = RootFindingParams {
            max_iterations: 0,
            ..RootFindingParams::<f64>::bisection()
        };
        let err = bisection(f, 1.0, 2.0, &params, &mut NoOpCallback).unwrap_err();
        assert!(matches!(err, SolverError::Numerical(_)));
    }
}
