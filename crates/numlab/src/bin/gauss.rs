//! Scaled-pivoting LU and naive elimination on the reference systems.

fn main() {
    numlab::init_logging();
    print!("{}", numlab::report::gauss_report());
}
