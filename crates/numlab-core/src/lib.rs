//! Floating-point precision demonstrations.
//!
//! This crate measures and exposes the limits of IEEE-754 arithmetic in
//! single and double precision.
//!
//! # Modules
//!
//! - [`types`]: the [`Scalar`] abstraction over `f32`/`f64`
//! - [`error`]: error types for parameter validation
//! - [`format`]: fixed-significance rendering used by every report
//! - [`numerical::precision`]: machine epsilon by repeated halving
//! - [`numerical::cancellation`]: subtractive vs. rationalized `sqrt(x² + 1) − 1`
//! - [`numerical::stability`]: direct vs. series-stabilized `x − sin(x)`

pub mod error;
pub mod format;
pub mod numerical;
pub mod types;

pub use error::{NumericalError, Result};
pub use types::Scalar;

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use numlab_core::prelude::*;
///
/// let estimate = find_machine_epsilon::<f32>();
/// assert_eq!(estimate.halvings, 23);
/// ```
pub mod prelude {
    pub use crate::error::{NumericalError, Result};
    pub use crate::format::{sig, Significant, REPORT_DIGITS};
    pub use crate::numerical::*;
    pub use crate::types::Scalar;
}
