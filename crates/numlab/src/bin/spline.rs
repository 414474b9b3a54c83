//! Natural cubic spline through `sqrt` sampled on a uniform grid.

use std::process::ExitCode;

fn main() -> ExitCode {
    numlab::init_logging();
    match numlab::report::spline_report() {
        Ok(report) => {
            print!("{}", report);
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("spline report failed: {}", err);
            ExitCode::FAILURE
        }
    }
}
