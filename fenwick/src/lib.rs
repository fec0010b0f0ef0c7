//! Fenwick tree (binary indexed tree) with naive baselines and a benchmark
//! harness.
//!
//! Three structures support point updates and prefix-sum queries over a
//! fixed-size `i64` array: [`FenwickTree`] (O(log n) for both operations),
//! [`NaiveSumOnQuery`] (O(1) update, O(n) query), and [`NaivePrefixArray`]
//! (O(n) update, O(1) query). The benchmark harness drives all three through
//! deterministic workloads to show the trade-off; the `compare` binary prints
//! the fixed comparison report.

mod construction;
mod error;
mod harness;
mod macros;
mod query_operations;
mod types;
mod update_operations;
mod validation;

pub use construction::{validation as size_validation, DEFAULT_SIZE};
pub use error::{
    FenwickError, FenwickResult, FenwickResultExt, InitResult, QueryResult, UpdateResult,
};
pub use harness::{
    generate_workload, render_report, run_benchmark, run_workload, BenchmarkConfig, Op,
    WorkloadKind, WorkloadReport, CONCLUSIONS, MAX_DELTA, MIN_DELTA,
};
pub use types::{FenwickTree, NaivePrefixArray, NaiveSumOnQuery, PrefixSums};
