//! Text reports printed by the executables.
//!
//! Each function renders one complete program output, so the binaries only
//! have to print the returned string.

use nalgebra::{DMatrix, DVector};
use numlab_core::format::{sig, Significant};
use numlab_core::numerical::{
    cancellation_table, find_machine_epsilon, stability_table, CancellationConfig,
    StabilityConfig,
};
use numlab_core::Result;
use numlab_methods::heat::{solve_explicit, HeatParams};
use numlab_methods::linear::{gauss_naive_solve, ScaledPivotLu};
use numlab_methods::spline::CubicSpline;
use numlab_methods::SolverResult;

/// Machine epsilon in single and double precision.
pub fn epsilon_report() -> String {
    format!(
        "{}\n{}\n",
        find_machine_epsilon::<f32>(),
        find_machine_epsilon::<f64>()
    )
}

/// Subtractive vs. rationalized `sqrt(x² + 1) − 1` for every configured `k`.
pub fn cancellation_report(config: &CancellationConfig) -> Result<String> {
    Ok(cancellation_table::<f64>(config)?
        .iter()
        .map(|sample| format!("{}\n\n", sample))
        .collect())
}

/// Naive vs. stabilized `x − sin(x)` for every configured input.
pub fn stability_report(config: &StabilityConfig) -> Result<String> {
    Ok(stability_table::<f64>(config)?
        .iter()
        .map(|sample| format!("{}\n\n", sample))
        .collect())
}

/// Named linear systems solved by the elimination report.
pub fn reference_systems() -> Vec<(&'static str, DMatrix<f64>, DVector<f64>)> {
    vec![
        (
            "Example 1: well-conditioned",
            DMatrix::from_row_slice(3, 3, &[2.0, 3.0, -6.0, 1.0, -6.0, 8.0, 3.0, -2.0, 1.0]),
            DVector::from_vec(vec![7.0, 14.0, 28.0]),
        ),
        (
            "Example 2: zero on the diagonal",
            DMatrix::from_row_slice(2, 2, &[0.0, 1.0, 1.0, 1.0]),
            DVector::from_vec(vec![1.0, 2.0]),
        ),
        (
            "Example 3: tiny pivot",
            DMatrix::from_row_slice(2, 2, &[1e-12, 1.0, 1.0, 1.0]),
            DVector::from_vec(vec![1.0, 2.0]),
        ),
        (
            "Example 4: regular 3x3 system",
            DMatrix::from_row_slice(3, 3, &[4.0, -2.0, 1.0, 1.0, 6.0, -2.0, 3.0, 1.0, 5.0]),
            DVector::from_vec(vec![1.0, 2.0, 3.0]),
        ),
        (
            "Example 5: ill-conditioned",
            DMatrix::from_row_slice(
                3,
                3,
                &[1.0, 1.0, 1.0, 1.0, 1.0001, 1.0, 1.0, 1.0, 1.0002],
            ),
            DVector::from_vec(vec![3.0, 3.0001, 3.0002]),
        ),
    ]
}

fn cell(value: f64) -> String {
    format!("{:>10}", Significant::new(value, 6).to_string())
}

fn format_matrix(m: &DMatrix<f64>) -> String {
    m.row_iter()
        .map(|row| row.iter().map(|&v| cell(v)).collect::<Vec<_>>().join("  "))
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_vector(v: &DVector<f64>) -> String {
    v.iter().map(|&x| cell(x)).collect::<Vec<_>>().join("\n")
}

fn lu_section(a: &DMatrix<f64>, b: &DVector<f64>) -> SolverResult<String> {
    let lu = ScaledPivotLu::factor(a)?;
    let x = lu.solve(b)?;

    Ok([
        format!("A =\n{}\n", format_matrix(a)),
        format!("\nb =\n{}\n", format_vector(b)),
        format!("\nx =\n{}\n", format_vector(&x)),
        format!("\nL =\n{}\n", format_matrix(&lu.lower())),
        format!("\nU =\n{}\n", format_matrix(&lu.upper())),
        format!("\nP =\n{}\n", format_matrix(&lu.permutation_matrix())),
        format!("\ns =\n{}\n", format_vector(lu.scales())),
        format!("\np =\n{:?}\n", lu.permutation()),
    ]
    .concat())
}

/// Scaled-pivoting and naive elimination on the reference systems.
pub fn gauss_report() -> String {
    let rule = "=".repeat(70);
    let mut out = String::new();

    for (name, a, b) in reference_systems() {
        out.push_str(&format!("\n{}\n{}\n{}\n", rule, name, rule));
        out.push_str("\nGaussian elimination with scaled partial pivoting:\n");
        match lu_section(&a, &b) {
            Ok(section) => out.push_str(&section),
            Err(err) => out.push_str(&format!("failed: {}\n", err)),
        }

        out.push_str("\nNaive Gaussian elimination:\n");
        match gauss_naive_solve(&a, &b) {
            Ok(x) => out.push_str(&format!("{}\n", format_vector(&x))),
            Err(err) => out.push_str(&format!("failed:\n  {}\n", err)),
        }
        out.push_str(&format!("\n{}\n\n", "-".repeat(70)));
    }

    out
}

/// Natural spline through `sqrt` on `0, 0.25, ..., 2.25`, evaluated at 1.5.
pub fn spline_report() -> SolverResult<String> {
    let t: Vec<f64> = (0..10).map(|i| f64::from(i) * 0.25).collect();
    let y: Vec<f64> = t.iter().map(|x| x.sqrt()).collect();
    let spline = CubicSpline::natural(&t, &y)?;

    let mut out = String::from("Second derivatives at the knots:\n");
    for z in spline.second_derivatives() {
        out.push_str(&format!("{}\n", z));
    }
    out.push_str(&format!("Spline value at x = 1.5: {}\n", spline.evaluate(1.5)?));
    Ok(out)
}

/// The two reference runs of the explicit heat solver.
pub fn heat_runs() -> [HeatParams; 2] {
    [
        HeatParams {
            h: 0.1,
            k: 0.005125,
            steps: 200,
        },
        HeatParams {
            h: 0.1,
            k: 0.006,
            steps: 171,
        },
    ]
}

/// Final time, mesh ratio and max-norm error of each reference run.
pub fn heat_report() -> Result<String> {
    heat_runs()
        .iter()
        .map(|params| -> Result<String> {
            let solution = solve_explicit(params)?;
            Ok(format!(
                "t_final = {}\ns = {}\n|error| = {}\n",
                solution.t_final,
                solution.s,
                sig(solution.error_inf)
            ))
        })
        .collect()
}
