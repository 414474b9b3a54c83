//! Explicit finite differences for `u_t = u_xx` on `[0, 1]`.

use std::process::ExitCode;

fn main() -> ExitCode {
    numlab::init_logging();
    match numlab::report::heat_report() {
        Ok(report) => {
            print!("{}", report);
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("heat report failed: {}", err);
            ExitCode::FAILURE
        }
    }
}
