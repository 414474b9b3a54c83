//! Classical numerical methods built on `numlab-core`.
//!
//! # Modules
//!
//! - [`roots`]: Newton, secant and bisection root finders
//! - [`linear`]: naive Gaussian elimination and LU with scaled partial pivoting
//! - [`spline`]: natural cubic spline interpolation
//! - [`heat`]: explicit finite-difference solver for the 1-D heat equation
//! - [`callback`]: per-iteration observers for iterative solvers
//! - [`error`]: solver error types

pub mod callback;
pub mod error;
pub mod heat;
pub mod linear;
pub mod roots;
pub mod spline;

pub use error::{SolverError, SolverResult};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::callback::{
        IterationCallback, IterationHistory, NoOpCallback, PrintIterationCallback,
    };
    pub use crate::error::{SolverError, SolverResult};
    pub use crate::heat::{
        exact_solution, solve_explicit, HeatParams, HeatSolution, MAX_INTERIOR_NODES,
    };
    pub use crate::linear::{back_substitution, gauss_naive_solve, ScaledPivotLu};
    pub use crate::roots::{bisection, newton, secant, RootFindingParams, RootReport};
    pub use crate::spline::CubicSpline;
}
