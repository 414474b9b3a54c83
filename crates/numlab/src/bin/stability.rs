//! Compares direct and series-stabilized `x − sin(x)`.

use numlab::numlab_core::numerical::StabilityConfig;
use numlab::report::stability_report;
use std::process::ExitCode;

fn main() -> ExitCode {
    numlab::init_logging();
    match stability_report(&StabilityConfig::default()) {
        Ok(report) => {
            print!("{}", report);
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("stability report failed: {}", err);
            ExitCode::FAILURE
        }
    }
}
