//! Fixed benchmark comparing the three prefix-sum structures.
//!
//! Takes no arguments, runs the default configuration, prints the report to
//! stdout, and exits 0.

use fenwick::{render_report, run_benchmark, BenchmarkConfig};

fn main() {
    let config = BenchmarkConfig::default();
    let reports = run_benchmark(&config).expect("default configuration is valid");
    print!("{}", render_report(&config, &reports));
}
