//! Compares `sqrt(x² + 1) − 1` with its rationalized form at `x = 8^(-k)`.

use numlab::numlab_core::numerical::CancellationConfig;
use numlab::report::cancellation_report;
use std::process::ExitCode;

fn main() -> ExitCode {
    numlab::init_logging();
    match cancellation_report(&CancellationConfig::default()) {
        Ok(report) => {
            print!("{}", report);
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("cancellation report failed: {}", err);
            ExitCode::FAILURE
        }
    }
}
