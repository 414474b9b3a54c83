//! Series stabilization of `x − sin(x)` near zero.
//!
//! For small `|x|`, `sin(x)` agrees with `x` in almost every digit and the
//! direct difference keeps only rounding noise. Below a fixed threshold the
//! stabilized evaluation switches to the truncated Maclaurin series
//! `x³/6 − x⁵/120 + x⁷/5040`, which contains no subtraction of close values.

use crate::error::{NumericalError, Result};
use crate::format::sig;
use crate::types::Scalar;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Magnitude below which the series branch is taken.
pub const DEFAULT_THRESHOLD: f64 = 1e-3;

/// Inputs of the reference report, in print order.
pub const DEFAULT_INPUTS: [f64; 4] = [1e-1, 1e-5, 1e-8, 1.0];

/// Which formula the stabilized evaluation used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Branch {
    /// Truncated Taylor series, taken when `|x| < threshold`.
    Series,
    /// Direct `x − sin(x)`, taken otherwise (including `|x| == threshold`).
    Direct,
}

/// Threshold and inputs of the comparison.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StabilityConfig {
    /// Series branch is used strictly below this magnitude
    pub threshold: f64,
    /// Points at which both formulas are evaluated
    pub inputs: Vec<f64>,
}

impl Default for StabilityConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            inputs: DEFAULT_INPUTS.to_vec(),
        }
    }
}

impl StabilityConfig {
    /// Check that the threshold is a positive finite number and inputs are finite.
    pub fn validate(&self) -> Result<()> {
        if !(self.threshold.is_finite() && self.threshold > 0.0) {
            return Err(NumericalError::invalid_parameter(
                "threshold",
                format!("must be positive and finite, got {}", self.threshold),
            ));
        }
        if let Some(bad) = self.inputs.iter().find(|x| !x.is_finite()) {
            return Err(NumericalError::invalid_parameter(
                "inputs",
                format!("all inputs must be finite, got {}", bad),
            ));
        }
        Ok(())
    }
}

/// One row of the comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StabilitySample<T> {
    /// Evaluation point
    pub x: T,
    /// `x − sin(x)` evaluated directly
    pub naive: T,
    /// Stabilized evaluation
    pub stable: T,
    /// Formula used for `stable`
    pub branch: Branch,
}

impl<T: Scalar> StabilitySample<T> {
    /// `|naive − stable|`.
    pub fn difference(&self) -> T {
        (self.naive - self.stable).abs()
    }
}

/// `x − sin(x)` evaluated as written.
pub fn naive_difference<T: Scalar>(x: T) -> T {
    x - x.sin()
}

/// Truncated series `x³/6 − x⁵/120 + x⁷/5040`.
pub fn series_difference<T: Scalar>(x: T) -> T {
    x.powi(3) / T::constant(6.0) - x.powi(5) / T::constant(120.0)
        + x.powi(7) / T::constant(5040.0)
}

/// Choose the formula for `x`: series iff `|x| < threshold`.
pub fn select_branch<T: Scalar>(x: T, threshold: T) -> Branch {
    if x.abs() < threshold {
        Branch::Series
    } else {
        Branch::Direct
    }
}

/// Stabilized `x − sin(x)`.
pub fn stable_difference<T: Scalar>(x: T, threshold: T) -> T {
    match select_branch(x, threshold) {
        Branch::Series => series_difference(x),
        Branch::Direct => naive_difference(x),
    }
}

/// Evaluate both formulas at `x`.
pub fn stability_sample<T: Scalar>(x: T, threshold: T) -> StabilitySample<T> {
    let branch = select_branch(x, threshold);
    log::trace!("x = {:e}: {:?} branch", x, branch);
    StabilitySample {
        x,
        naive: naive_difference(x),
        stable: stable_difference(x, threshold),
        branch,
    }
}

/// Evaluate both formulas at every configured input, in order.
pub fn stability_table<T: Scalar>(config: &StabilityConfig) -> Result<Vec<StabilitySample<T>>> {
    config.validate()?;
    let threshold = T::constant(config.threshold);
    Ok(config
        .inputs
        .iter()
        .map(|&x| stability_sample(T::constant(x), threshold))
        .collect())
}

impl<T: Scalar> fmt::Display for StabilitySample<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "x = {}", sig(self.x))?;
        writeln!(f, "  naive      = {}", sig(self.naive))?;
        writeln!(f, "  stable     = {}", sig(self.stable))?;
        write!(f, "  difference = {}", sig(self.difference()))
    }
}
