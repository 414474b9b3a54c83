//! Explicit finite differences for the heat equation.
//!
//! Solves `u_t = u_xx` on `0 < x < 1` with `u(x, 0) = sin(πx)` and
//! `u(0, t) = u(1, t) = 0`, whose exact solution is `e^(−π²t) sin(πx)`.
//! With mesh ratio `s = k/h²` each step is
//!
//! ```text
//! w_i ← s·w_{i−1} + (1 − 2s)·w_i + s·w_{i+1}
//! ```
//!
//! The scheme is stable only for `s ≤ 1/2`; past that the highest grid mode
//! is amplified every step and rounding noise eventually dominates.

use nalgebra::DVector;
use numlab_core::{NumericalError, Result};
use std::f64::consts::PI;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest number of interior grid nodes accepted by [`HeatParams::validate`].
pub const MAX_INTERIOR_NODES: usize = 1_000_000;

/// Mesh and run length of the explicit scheme.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HeatParams {
    /// Spatial step
    pub h: f64,
    /// Time step
    pub k: f64,
    /// Number of time steps
    pub steps: usize,
}

impl HeatParams {
    /// Check that the mesh has between one and [`MAX_INTERIOR_NODES`]
    /// interior nodes and the time step is positive.
    pub fn validate(&self) -> Result<()> {
        if !(self.h > 0.0 && self.h <= 0.5) {
            return Err(NumericalError::invalid_parameter(
                "h",
                format!("must lie in (0, 0.5], got {}", self.h),
            ));
        }
        let nodes = self.interior_nodes();
        if nodes > MAX_INTERIOR_NODES {
            return Err(NumericalError::invalid_parameter(
                "h",
                format!(
                    "mesh of {} interior nodes exceeds the limit of {}",
                    nodes, MAX_INTERIOR_NODES
                ),
            ));
        }
        if !(self.k > 0.0 && self.k.is_finite()) {
            return Err(NumericalError::invalid_parameter(
                "k",
                format!("must be positive and finite, got {}", self.k),
            ));
        }
        Ok(())
    }

    /// Number of interior grid nodes.
    pub fn interior_nodes(&self) -> usize {
        ((1.0 / self.h).round() as usize).saturating_sub(1)
    }

    /// Mesh ratio `s = k/h²`.
    pub fn mesh_ratio(&self) -> f64 {
        self.k / (self.h * self.h)
    }
}

/// Numerical and exact solutions at the final time.
#[derive(Debug, Clone, PartialEq)]
pub struct HeatSolution {
    /// Grid nodes `x_i`, boundaries included
    pub grid: DVector<f64>,
    /// Numerical solution at `t_final`
    pub numeric: DVector<f64>,
    /// Exact solution at `t_final`
    pub exact: DVector<f64>,
    /// Time reached after all steps
    pub t_final: f64,
    /// Mesh ratio `k/h²`
    pub s: f64,
    /// Max-norm error `max_i |numeric_i − exact_i|`
    pub error_inf: f64,
}

impl HeatSolution {
    /// Whether the run satisfied the stability bound `s ≤ 1/2`.
    pub fn is_stable_regime(&self) -> bool {
        self.s <= 0.5
    }
}

/// Exact solution `e^(−π²t) sin(πx)`.
pub fn exact_solution(x: f64, t: f64) -> f64 {
    (-PI * PI * t).exp() * (PI * x).sin()
}

/// Run the explicit scheme for `params.steps` time steps.
pub fn solve_explicit(params: &HeatParams) -> Result<HeatSolution> {
    params.validate()?;

    let n = params.interior_nodes();
    let s = params.mesh_ratio();
    let grid = DVector::from_fn(n + 2, |i, _| i as f64 / (n + 1) as f64);

    let mut w = grid.map(|x| exact_solution(x, 0.0));
    let mut next = DVector::zeros(n + 2);
    let mut t = 0.0;

    for j in 1..=params.steps {
        t = j as f64 * params.k;
        next[0] = 0.0;
        next[n + 1] = 0.0;
        for i in 1..=n {
            next[i] = s * w[i - 1] + (1.0 - 2.0 * s) * w[i] + s * w[i + 1];
        }
        std::mem::swap(&mut w, &mut next);
    }

    let exact = grid.map(|x| exact_solution(x, t));
    let error_inf = (&w - &exact).amax();
    log::debug!(
        "heat: n = {}, s = {}, t = {}, error = {:e}",
        n,
        s,
        t,
        error_inf
    );

    Ok(HeatSolution {
        grid,
        numeric: w,
        exact,
        t_final: t,
        s,
        error_inf,
    })
}
