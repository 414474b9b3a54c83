//! # numlab
//!
//! A small numerical-analysis laboratory.
//!
//! The core demonstrations ([`numlab_core`]) show where IEEE-754 arithmetic
//! stops behaving like real arithmetic: machine epsilon, catastrophic
//! cancellation in `sqrt(x² + 1) − 1`, and series stabilization of
//! `x − sin(x)`. The companion methods ([`numlab_methods`]) cover root
//! finding, Gaussian elimination, cubic splines and the heat equation.
//!
//! Every demonstration is also an executable under `src/bin/` that prints
//! its report and exits.
//!
//! ## Example
//!
//! ```
//! use numlab::prelude::*;
//!
//! let sample = stability_sample(1e-8_f64, 1e-3);
//! assert_eq!(sample.branch, Branch::Series);
//! ```

pub mod report;

pub use numlab_core;
pub use numlab_methods;

/// Re-export of nalgebra for matrix inputs.
pub use nalgebra;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use numlab_core::prelude::*;
    pub use numlab_methods::prelude::*;
}

/// Initialise `env_logger` for an executable.
///
/// Diagnostics go to stderr and are off unless `RUST_LOG` enables them, so
/// stdout carries only the report.
pub fn init_logging() {
    let _ = env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .try_init();
}
