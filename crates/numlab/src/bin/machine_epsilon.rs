//! Prints machine epsilon in single and double precision.

fn main() {
    numlab::init_logging();
    print!("{}", numlab::report::epsilon_report());
}
