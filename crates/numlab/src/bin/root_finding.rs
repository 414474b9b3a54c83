//! Newton, secant and bisection on `x² − 2`, printing every iterate.

use numlab::prelude::*;

fn f(x: f64) -> f64 {
    x * x - 2.0
}

fn df(x: f64) -> f64 {
    2.0 * x
}

fn print_outcome(result: SolverResult<RootReport<f64>>) {
    match result {
        Ok(report) => println!(
            "Root ≈ {:.7}, found in {} iterations.\n",
            report.root, report.iterations
        ),
        Err(err) => println!("{}\n", err),
    }
}

fn main() {
    numlab::init_logging();
    let mut printer = PrintIterationCallback;

    println!("Newton's method:");
    print_outcome(newton(f, df, 1.0, &RootFindingParams::newton(), &mut printer));

    println!("Secant method:");
    print_outcome(secant(f, 1.0, 2.0, &RootFindingParams::secant(), &mut printer));

    println!("Bisection method:");
    print_outcome(bisection(f, 1.0, 2.0, &RootFindingParams::bisection(), &mut printer));
}
