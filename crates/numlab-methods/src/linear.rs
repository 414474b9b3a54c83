//! Gaussian elimination for dense square systems.
//!
//! Two variants are provided:
//!
//! - [`gauss_naive_solve`]: textbook elimination in natural row order. It
//!   fails on a zero pivot and loses accuracy on tiny ones.
//! - [`ScaledPivotLu`]: elimination with scaled partial pivoting. Each row is
//!   weighted by its largest entry `sᵢ = maxⱼ |aᵢⱼ|`, and at step `k` the row
//!   maximising `|aᵢₖ| / sᵢ` becomes the pivot. Rows are never moved; the
//!   order is tracked in a permutation vector and the multipliers are stored
//!   in place of the eliminated entries, so `P·A = L·U` can be read back.

use crate::error::{SolverError, SolverResult};
use nalgebra::{DMatrix, DVector};
use numlab_core::NumericalError;

fn check_system(a: &DMatrix<f64>, b: Option<&DVector<f64>>) -> SolverResult<usize> {
    let n = a.nrows();
    if n == 0 || a.ncols() != n {
        return Err(NumericalError::dimension_mismatch(
            "non-empty square matrix",
            format!("{}x{}", a.nrows(), a.ncols()),
        )
        .into());
    }
    if let Some(b) = b {
        if b.len() != n {
            return Err(NumericalError::dimension_mismatch(
                format!("right-hand side of length {}", n),
                b.len(),
            )
            .into());
        }
    }
    Ok(n)
}

/// Solve `U·x = b` for upper-triangular `U` by back substitution.
///
/// Entries below the diagonal are ignored.
pub fn back_substitution(u: &DMatrix<f64>, b: &DVector<f64>) -> SolverResult<DVector<f64>> {
    let n = check_system(u, Some(b))?;
    let mut x = DVector::zeros(n);

    for i in (0..n).rev() {
        let pivot = u[(i, i)];
        if pivot == 0.0 {
            return Err(SolverError::ZeroPivot { row: i });
        }
        let sum: f64 = (i + 1..n).map(|j| u[(i, j)] * x[j]).sum();
        x[i] = (b[i] - sum) / pivot;
    }

    Ok(x)
}

/// Solve `A·x = b` by Gaussian elimination without pivoting.
pub fn gauss_naive_solve(a: &DMatrix<f64>, b: &DVector<f64>) -> SolverResult<DVector<f64>> {
    let n = check_system(a, Some(b))?;
    let mut a = a.clone();
    let mut b = b.clone();

    for k in 0..n - 1 {
        let pivot = a[(k, k)];
        if pivot == 0.0 {
            return Err(SolverError::ZeroPivot { row: k });
        }
        for i in k + 1..n {
            let z = a[(i, k)] / pivot;
            a[(i, k)] = 0.0;
            for j in k + 1..n {
                a[(i, j)] -= z * a[(k, j)];
            }
            b[i] -= z * b[k];
        }
    }

    back_substitution(&a, &b)
}

/// LU factorization by Gaussian elimination with scaled partial pivoting.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaledPivotLu {
    /// Working matrix: multipliers below the pivots, `U` on and above them,
    /// addressed through `permutation`.
    factors: DMatrix<f64>,
    permutation: Vec<usize>,
    scales: DVector<f64>,
}

impl ScaledPivotLu {
    /// Factor `a`.
    ///
    /// # Errors
    ///
    /// - [`SolverError::ZeroPivot`] if a row is entirely zero or the chosen
    ///   pivot is exactly zero (the matrix is singular).
    /// - Dimension mismatch for non-square input.
    pub fn factor(a: &DMatrix<f64>) -> SolverResult<Self> {
        let n = check_system(a, None)?;
        let mut factors = a.clone();
        let mut permutation: Vec<usize> = (0..n).collect();

        let scales = DVector::from_fn(n, |i, _| factors.row(i).amax());
        if let Some(row) = scales.iter().position(|&s| s == 0.0) {
            return Err(SolverError::ZeroPivot { row });
        }

        for k in 0..n - 1 {
            let mut best = k;
            let mut best_ratio = factors[(permutation[k], k)].abs() / scales[permutation[k]];
            for j in k + 1..n {
                let ratio = factors[(permutation[j], k)].abs() / scales[permutation[j]];
                if ratio > best_ratio {
                    best = j;
                    best_ratio = ratio;
                }
            }
            permutation.swap(k, best);

            let pivot_row = permutation[k];
            let pivot = factors[(pivot_row, k)];
            if pivot == 0.0 {
                return Err(SolverError::ZeroPivot { row: k });
            }
            log::trace!("step {}: pivot row {} (ratio {:e})", k, pivot_row, best_ratio);

            for &row in &permutation[k + 1..] {
                let z = factors[(row, k)] / pivot;
                factors[(row, k)] = z;
                for j in k + 1..n {
                    factors[(row, j)] -= z * factors[(pivot_row, j)];
                }
            }
        }

        Ok(Self {
            factors,
            permutation,
            scales,
        })
    }

    /// Order dimension of the factored matrix.
    pub fn dim(&self) -> usize {
        self.permutation.len()
    }

    /// Solve `A·x = b` using the stored factorization.
    pub fn solve(&self, b: &DVector<f64>) -> SolverResult<DVector<f64>> {
        let n = check_system(&self.factors, Some(b))?;
        let p = &self.permutation;
        let a = &self.factors;
        let mut b = b.clone();

        for k in 0..n - 1 {
            for i in k + 1..n {
                b[p[i]] -= a[(p[i], k)] * b[p[k]];
            }
        }

        let mut x = DVector::zeros(n);
        for ii in (0..n).rev() {
            let i = p[ii];
            let pivot = a[(i, ii)];
            if pivot == 0.0 {
                return Err(SolverError::ZeroPivot { row: ii });
            }
            let sum: f64 = (ii + 1..n).map(|j| a[(i, j)] * x[j]).sum();
            x[ii] = (b[i] - sum) / pivot;
        }

        Ok(x)
    }

    /// Unit lower-triangular factor `L`.
    pub fn lower(&self) -> DMatrix<f64> {
        let n = self.dim();
        DMatrix::from_fn(n, n, |i, j| match j.cmp(&i) {
            std::cmp::Ordering::Less => self.factors[(self.permutation[i], j)],
            std::cmp::Ordering::Equal => 1.0,
            std::cmp::Ordering::Greater => 0.0,
        })
    }

    /// Upper-triangular factor `U`.
    pub fn upper(&self) -> DMatrix<f64> {
        let n = self.dim();
        DMatrix::from_fn(n, n, |i, j| {
            if j >= i {
                self.factors[(self.permutation[i], j)]
            } else {
                0.0
            }
        })
    }

    /// Permutation matrix `P` with `P[i, p[i]] = 1`, so that `P·A = L·U`.
    pub fn permutation_matrix(&self) -> DMatrix<f64> {
        let n = self.dim();
        DMatrix::from_fn(n, n, |i, j| if self.permutation[i] == j { 1.0 } else { 0.0 })
    }

    /// Pivot order: `permutation()[k]` is the original row used at step `k`.
    pub fn permutation(&self) -> &[usize] {
        &self.permutation
    }

    /// Row scales `sᵢ = maxⱼ |aᵢⱼ|` of the original matrix.
    pub fn scales(&self) -> &DVector<f64> {
        &self.scales
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn well_conditioned() -> (DMatrix<f64>, DVector<f64>) {
        (
            DMatrix::from_row_slice(3, 3, &[2.0, 3.0, -6.0, 1.0, -6.0, 8.0, 3.0, -2.0, 1.0]),
            DVector::from_vec(vec![7.0, 14.0, 28.0]),
        )
    }

    #[test]
    fn test_back_substitution() {
        let u = DMatrix::from_row_slice(3, 3, &[2.0, 1.0, 1.0, 0.0, 3.0, 2.0, 0.0, 0.0, 4.0]);
        let b = DVector::from_vec(vec![5.0, 8.0, 8.0]);
        let x = back_substitution(&u, &b).unwrap();
        assert_relative_eq!(x, DVector::from_vec(vec![1.0, 4.0 / 3.0, 2.0]), epsilon = 1e-14);
    }

    #[test]
    fn test_back_substitution_zero_diagonal() {
        let u = DMatrix::from_row_slice(2, 2, &[1.0, 1.0, 0.0, 0.0]);
        let b = DVector::from_vec(vec![1.0, 1.0]);
        assert_eq!(
            back_substitution(&u, &b).unwrap_err(),
            SolverError::ZeroPivot { row: 1 }
        );
    }

    #[test]
    fn test_naive_and_scaled_agree_on_well_conditioned() {
        let (a, b) = well_conditioned();
        let expected = DVector::from_vec(vec![20.0, 25.0, 18.0]);

        let naive = gauss_naive_solve(&a, &b).unwrap();
        assert_relative_eq!(naive, expected, epsilon = 1e-12);

        let lu = ScaledPivotLu::factor(&a).unwrap();
        assert_eq!(lu.permutation(), &[2, 0, 1]);
        assert_eq!(lu.scales().as_slice(), &[6.0, 8.0, 3.0]);
        assert_relative_eq!(lu.solve(&b).unwrap(), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_factors_reconstruct_matrix() {
        let (a, _) = well_conditioned();
        let lu = ScaledPivotLu::factor(&a).unwrap();
        let pa = lu.permutation_matrix() * &a;
        let product = lu.lower() * lu.upper();
        assert_relative_eq!(pa, product, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_on_diagonal() {
        let a = DMatrix::from_row_slice(2, 2, &[0.0, 1.0, 1.0, 1.0]);
        let b = DVector::from_vec(vec![1.0, 2.0]);

        assert_eq!(
            gauss_naive_solve(&a, &b).unwrap_err(),
            SolverError::ZeroPivot { row: 0 }
        );

        let x = ScaledPivotLu::factor(&a).unwrap().solve(&b).unwrap();
        assert_relative_eq!(x, DVector::from_vec(vec![1.0, 1.0]), epsilon = 1e-15);
    }

    #[test]
    fn test_tiny_pivot_loses_accuracy_without_pivoting() {
        let a = DMatrix::from_row_slice(2, 2, &[1e-12, 1.0, 1.0, 1.0]);
        let b = DVector::from_vec(vec![1.0, 2.0]);

        let naive = gauss_naive_solve(&a, &b).unwrap();
        let scaled = ScaledPivotLu::factor(&a).unwrap().solve(&b).unwrap();

        assert!((naive[0] - 1.0).abs() > 1e-6);
        assert!((scaled[0] - 1.0).abs() < 1e-11);
        assert!((scaled[1] - 1.0).abs() < 1e-11);
    }

    #[test]
    fn test_singular_matrix() {
        let a = DMatrix::from_row_slice(2, 2, &[1.0, 2.0, 2.0, 4.0]);
        let b = DVector::from_vec(vec![1.0, 2.0]);
        let lu = ScaledPivotLu::factor(&a).unwrap();
        assert!(matches!(lu.solve(&b), Err(SolverError::ZeroPivot { row: 1 })));

        let zero_row = DMatrix::from_row_slice(2, 2, &[1.0, 2.0, 0.0, 0.0]);
        assert_eq!(
            ScaledPivotLu::factor(&zero_row).unwrap_err(),
            SolverError::ZeroPivot { row: 1 }
        );
    }

    #[test]
    fn test_dimension_checks() {
        let a = DMatrix::<f64>::zeros(2, 3);
        assert!(matches!(
            ScaledPivotLu::factor(&a),
            Err(SolverError::Numerical(NumericalError::DimensionMismatch { .. }))
        ));

        let (a, _) = well_conditioned();
        let b = DVector::from_vec(vec![1.0, 2.0]);
        assert!(gauss_naive_solve(&a, &b).is_err());
    }
}
