//! Natural cubic spline interpolation.
//!
//! On each interval `[tᵢ, tᵢ₊₁]` the spline is the cubic determined by the
//! end values `yᵢ, yᵢ₊₁` and second derivatives `zᵢ, zᵢ₊₁`. Continuity of
//! the first derivative gives a tridiagonal system for the interior `zᵢ`;
//! the natural end conditions fix `z₀ = zₙ = 0`.

use crate::error::{SolverError, SolverResult};
use numlab_core::NumericalError;

/// Interpolating natural cubic spline through `(tᵢ, yᵢ)`.
#[derive(Debug, Clone, PartialEq)]
pub struct CubicSpline {
    knots: Vec<f64>,
    values: Vec<f64>,
    steps: Vec<f64>,
    second_derivatives: Vec<f64>,
}

impl CubicSpline {
    /// Build the natural spline through the given points.
    ///
    /// # Errors
    ///
    /// - Dimension mismatch if `t` and `y` differ in length.
    /// - [`SolverError::InsufficientData`] for fewer than three points.
    /// - Invalid parameter if the knots are not strictly increasing.
    pub fn natural(t: &[f64], y: &[f64]) -> SolverResult<Self> {
        if t.len() != y.len() {
            return Err(NumericalError::dimension_mismatch(
                format!("{} values", t.len()),
                format!("{} values", y.len()),
            )
            .into());
        }
        if t.len() < 3 {
            return Err(SolverError::insufficient_data(format!(
                "a natural cubic spline needs at least 3 points, got {}",
                t.len()
            )));
        }
        if let Some(i) = t.windows(2).position(|w| !(w[1] > w[0])) {
            return Err(NumericalError::invalid_parameter(
                "t",
                format!("knots must be strictly increasing (t[{}] >= t[{}])", i, i + 1),
            )
            .into());
        }

        let n = t.len() - 1;
        let h: Vec<f64> = t.windows(2).map(|w| w[1] - w[0]).collect();
        let b: Vec<f64> = (0..n).map(|i| 6.0 * (y[i + 1] - y[i]) / h[i]).collect();

        // Forward elimination of the tridiagonal system for z[1..n].
        let mut u = vec![0.0; n + 1];
        let mut v = vec![0.0; n + 1];
        u[1] = 2.0 * (h[0] + h[1]);
        v[1] = b[1] - b[0];
        for i in 2..n {
            u[i] = 2.0 * (h[i - 1] + h[i]) - h[i - 1] * h[i - 1] / u[i - 1];
            v[i] = b[i] - b[i - 1] - h[i - 1] * v[i - 1] / u[i - 1];
        }

        let mut z = vec![0.0; n + 1];
        for i in (1..n).rev() {
            z[i] = (v[i] - h[i] * z[i + 1]) / u[i];
        }

        Ok(Self {
            knots: t.to_vec(),
            values: y.to_vec(),
            steps: h,
            second_derivatives: z,
        })
    }

    /// Evaluate the spline at `x`.
    ///
    /// At an interior knot the left interval is used; both give the same value.
    pub fn evaluate(&self, x: f64) -> SolverResult<f64> {
        let (t, y, z) = (&self.knots, &self.values, &self.second_derivatives);
        let n = t.len() - 1;
        if !(x >= t[0] && x <= t[n]) {
            return Err(NumericalError::out_of_domain(x, t[0], t[n]).into());
        }

        let i = t[1..].partition_point(|&knot| knot < x).min(n - 1);
        let h = self.steps[i];
        let right = t[i + 1] - x;
        let left = x - t[i];

        Ok((z[i] / 6.0 * right.powi(3) + z[i + 1] / 6.0 * left.powi(3)) / h
            + (y[i + 1] / h - z[i + 1] * h / 6.0) * left
            + (y[i] / h - z[i] * h / 6.0) * right)
    }

    /// Second derivatives `zᵢ` at the knots, with `z₀ = zₙ = 0`.
    pub fn second_derivatives(&self) -> &[f64] {
        &self.second_derivatives
    }

    /// Interpolation knots.
    pub fn knots(&self) -> &[f64] {
        &self.knots
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sqrt_data() -> (Vec<f64>, Vec<f64>) {
        let t: Vec<f64> = (0..10).map(|i| i as f64 * 0.25).collect();
        let y = t.iter().map(|x| x.sqrt()).collect();
        (t, y)
    }

    #[test]
    fn test_natural_end_conditions() {
        let (t, y) = sqrt_data();
        let spline = CubicSpline::natural(&t, &y).unwrap();
        let z = spline.second_derivatives();
        assert_eq!(z.len(), 10);
        assert_eq!(z[0], 0.0);
        assert_eq!(z[9], 0.0);
        assert_relative_eq!(z[1], -7.241418786616804, epsilon = 1e-12);
        assert_relative_eq!(z[8], -0.10721460045701225, epsilon = 1e-12);
    }

    #[test]
    fn test_interpolates_knots() {
        let (t, y) = sqrt_data();
        let spline = CubicSpline::natural(&t, &y).unwrap();
        assert_eq!(spline.knots(), t.as_slice());
        for (&ti, &yi) in spline.knots().iter().zip(&y) {
            assert_relative_eq!(spline.evaluate(ti).unwrap(), yi, epsilon = 1e-14);
        }
        assert_relative_eq!(spline.evaluate(1.5).unwrap(), 1.5f64.sqrt(), epsilon = 1e-14);
    }

    #[test]
    fn test_between_knots() {
        let (t, y) = sqrt_data();
        let spline = CubicSpline::natural(&t, &y).unwrap();
        assert_relative_eq!(spline.evaluate(1.1).unwrap(), 1.1f64.sqrt(), epsilon = 1e-3);
    }

    #[test]
    fn test_reproduces_straight_line() {
        let t = [0.0, 1.0, 3.0, 4.0];
        let y: Vec<f64> = t.iter().map(|x| 2.0 * x - 1.0).collect();
        let spline = CubicSpline::natural(&t, &y).unwrap();
        for z in spline.second_derivatives() {
            assert_relative_eq!(*z, 0.0, epsilon = 1e-14);
        }
        assert_relative_eq!(spline.evaluate(2.5).unwrap(), 4.0, epsilon = 1e-14);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(matches!(
            CubicSpline::natural(&[0.0, 1.0], &[0.0, 1.0]),
            Err(SolverError::InsufficientData { .. })
        ));
        assert!(matches!(
            CubicSpline::natural(&[0.0, 1.0, 1.0], &[0.0, 1.0, 2.0]),
            Err(SolverError::Numerical(NumericalError::InvalidParameter { .. }))
        ));
        assert!(CubicSpline::natural(&[0.0, 1.0, 2.0], &[0.0, 1.0]).is_err());
    }

    #[test]
    fn test_out_of_domain() {
        let (t, y) = sqrt_data();
        let spline = CubicSpline::natural(&t, &y).unwrap();
        assert_eq!(
            spline.evaluate(3.0).unwrap_err(),
            SolverError::Numerical(NumericalError::out_of_domain(3.0, 0.0, 2.25))
        );
        assert!(spline.evaluate(-0.1).is_err());
        assert!(spline.evaluate(f64::NAN).is_err());
    }
}
