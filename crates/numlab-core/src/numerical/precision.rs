//! Empirical machine epsilon by repeated halving.
//!
//! Starting from one, the candidate is halved for as long as adding half of
//! it to one still produces a value greater than one. The loop runs entirely
//! in `T`; instantiating it with `f32` keeps every intermediate in single
//! precision.

use crate::format::sig;
use crate::types::Scalar;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Outcome of the halving search for one precision.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EpsilonEstimate<T> {
    /// Smallest power of two `ε` for which `1 + ε > 1`.
    pub epsilon: T,
    /// Number of halvings performed to reach `epsilon`.
    pub halvings: u32,
}

/// Find machine epsilon of `T` by halving a candidate until `1 + candidate/2`
/// rounds back to `1`.
///
/// For IEEE-754 types the result is `2^-(MANTISSA_DIGITS - 1)`, reached after
/// `MANTISSA_DIGITS - 1` halvings.
pub fn find_machine_epsilon<T: Scalar>() -> EpsilonEstimate<T> {
    let one = T::one();
    let two = one + one;

    let mut candidate = one;
    let mut halvings = 0u32;
    while one + candidate / two > one {
        candidate = candidate / two;
        halvings += 1;
    }

    let estimate = EpsilonEstimate {
        epsilon: candidate,
        halvings,
    };
    log::debug!(
        "{} epsilon search stopped after {} halvings (matches significand width: {})",
        T::LABEL,
        halvings,
        estimate.matches_significand()
    );
    estimate
}

impl<T: Scalar> EpsilonEstimate<T> {
    /// Whether the search landed on `2^-(MANTISSA_DIGITS - 1)`, the epsilon
    /// implied by the width of the significand.
    pub fn matches_significand(&self) -> bool {
        self.halvings + 1 == T::MANTISSA_DIGITS && self.epsilon == T::EPSILON
    }
}

impl<T: Scalar> fmt::Display for EpsilonEstimate<T> {
    /// `Epsilon (float)  = <value>   dla k = <halvings>`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = format!("({})", T::LABEL);
        write!(
            f,
            "Epsilon {:<8} = {}   dla k = {}",
            label,
            sig(self.epsilon),
            self.halvings
        )
    }
}
