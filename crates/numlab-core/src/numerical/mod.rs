//! The three floating-point demonstrations.

pub mod cancellation;
pub mod precision;
pub mod stability;

pub use cancellation::{
    cancellation_sample, cancellation_table, rationalized_form, subtractive_form,
    CancellationConfig, CancellationSample, MAX_EXPONENT,
};
pub use precision::{find_machine_epsilon, EpsilonEstimate};
pub use stability::{
    naive_difference, select_branch, series_difference, stability_sample, stability_table,
    stable_difference, Branch, StabilityConfig, StabilitySample,
};
