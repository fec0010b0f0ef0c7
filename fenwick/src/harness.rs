//! Benchmark harness driving the three structures through synthetic workloads.
//!
//! Workloads are materialized up front from a fixed-seed RNG and replayed
//! identically on every structure, so all three see exactly the same
//! operation sequence. Timing uses the monotonic [`Instant`] clock; report
//! rendering is a pure string function so it can be asserted on in tests.

use std::hint::black_box;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::InitResult;
use crate::types::{FenwickTree, NaivePrefixArray, NaiveSumOnQuery, PrefixSums};

// ============================================================================
// WORKLOAD MODEL
// ============================================================================

/// Smallest delta drawn for a generated update.
pub const MIN_DELTA: i64 = 1;

/// Largest delta drawn for a generated update.
pub const MAX_DELTA: i64 = 10;

/// The three synthetic operation mixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkloadKind {
    /// Every operation is a prefix-sum query.
    QueryHeavy,
    /// Every operation is a point update.
    UpdateHeavy,
    /// 50/50 coin flip between query and update per operation.
    Mixed,
}

impl WorkloadKind {
    /// All workloads, in report order.
    pub fn all() -> [WorkloadKind; 3] {
        [
            WorkloadKind::QueryHeavy,
            WorkloadKind::UpdateHeavy,
            WorkloadKind::Mixed,
        ]
    }

    /// Human-readable mix description used in report section headers.
    pub fn label(&self) -> &'static str {
        match self {
            WorkloadKind::QueryHeavy => "100% queries",
            WorkloadKind::UpdateHeavy => "100% updates",
            WorkloadKind::Mixed => "50% queries + 50% updates",
        }
    }
}

/// One pre-drawn operation of a workload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// Add `delta` to the element at `index`.
    Update { index: usize, delta: i64 },
    /// Query the inclusive prefix sum at `index`.
    PrefixSum { index: usize },
}

/// Benchmark parameters; `Default` is the fixed configuration the CLI runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchmarkConfig {
    /// Logical array size of every structure.
    pub size: usize,
    /// Operations per workload.
    pub operations: usize,
    /// RNG seed; the same seed always yields the same workloads.
    pub seed: u64,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            size: 100_000,
            operations: 50_000,
            seed: 42,
        }
    }
}

/// Generate the full operation sequence for one workload.
///
/// Each operation draws its index first and, for updates, its delta second,
/// so the sequence is fully determined by `config.seed` and `kind`.
pub fn generate_workload(config: &BenchmarkConfig, kind: WorkloadKind) -> Vec<Op> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut ops = Vec::with_capacity(config.operations);

    for _ in 0..config.operations {
        let index = rng.gen_range(0..config.size);
        let op = match kind {
            WorkloadKind::QueryHeavy => Op::PrefixSum { index },
            WorkloadKind::UpdateHeavy => Op::Update {
                index,
                delta: rng.gen_range(MIN_DELTA..=MAX_DELTA),
            },
            WorkloadKind::Mixed => {
                if rng.gen_range(0..2) == 0 {
                    Op::PrefixSum { index }
                } else {
                    Op::Update {
                        index,
                        delta: rng.gen_range(MIN_DELTA..=MAX_DELTA),
                    }
                }
            }
        };
        ops.push(op);
    }

    ops
}

// ============================================================================
// TIMING
// ============================================================================

/// Replay `ops` against `structure`, returning the elapsed wall-clock time.
///
/// Query results pass through [`black_box`] so the optimizer cannot discard
/// the query loops.
pub fn run_workload<S: PrefixSums>(structure: &mut S, ops: &[Op]) -> Duration {
    let start = Instant::now();
    for op in ops {
        match *op {
            Op::Update { index, delta } => structure.update(index, delta),
            Op::PrefixSum { index } => {
                black_box(structure.prefix_sum(index));
            }
        }
    }
    start.elapsed()
}

/// Per-workload timing results, one entry per structure in run order.
#[derive(Debug, Clone)]
pub struct WorkloadReport {
    pub kind: WorkloadKind,
    pub timings: Vec<(&'static str, Duration)>,
}

/// Run every workload against all three structures.
///
/// The structures are constructed once and carried through the whole pass, so
/// later workloads run against state accumulated by earlier ones, exactly as
/// a long-lived structure would behave. Within a workload the identical `ops`
/// vector is replayed on each structure.
pub fn run_benchmark(config: &BenchmarkConfig) -> InitResult<Vec<WorkloadReport>> {
    let mut fenwick = FenwickTree::new(config.size)?;
    let mut sum_on_query = NaiveSumOnQuery::new(config.size)?;
    let mut prefix_array = NaivePrefixArray::new(config.size)?;

    let mut reports = Vec::with_capacity(3);
    for kind in WorkloadKind::all() {
        let ops = generate_workload(config, kind);
        let timings = vec![
            (fenwick.label(), run_workload(&mut fenwick, &ops)),
            (sum_on_query.label(), run_workload(&mut sum_on_query, &ops)),
            (prefix_array.label(), run_workload(&mut prefix_array, &ops)),
        ];
        reports.push(WorkloadReport { kind, timings });
    }

    Ok(reports)
}

// ============================================================================
// REPORTING
// ============================================================================

/// The four fixed take-aways printed after the timing sections.
pub const CONCLUSIONS: [&str; 4] = [
    "Naive (sum on query): fast updates, slow queries",
    "Naive (prefix array): fast queries, slow updates",
    "Fenwick tree: balanced performance on both operations",
    "Fenwick tree wins under mixed load, the common real-world case",
];

/// Render the complete human-readable report.
///
/// Format: a configuration header, then one section per workload listing each
/// structure's elapsed time in whole milliseconds followed by a blank line,
/// then the fixed conclusions.
pub fn render_report(config: &BenchmarkConfig, reports: &[WorkloadReport]) -> String {
    let mut out = String::new();

    out.push_str(&format!("Array size: {}\n", config.size));
    out.push_str(&format!("Operations: {}\n\n", config.operations));

    for (i, report) in reports.iter().enumerate() {
        out.push_str(&format!("=== Test {}: {} ===\n", i + 1, report.kind.label()));
        for (label, elapsed) in &report.timings {
            out.push_str(&format!(
                "{:<22}{} ms\n",
                format!("{}:", label),
                elapsed.as_millis()
            ));
        }
        out.push('\n');
    }

    out.push_str("=== Conclusions ===\n");
    for conclusion in CONCLUSIONS {
        out.push_str(&format!("* {}\n", conclusion));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> BenchmarkConfig {
        BenchmarkConfig {
            size: 64,
            operations: 500,
            seed: 42,
        }
    }

    #[test]
    fn test_workloads_are_deterministic() {
        let config = small_config();
        for kind in WorkloadKind::all() {
            let first = generate_workload(&config, kind);
            let second = generate_workload(&config, kind);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_seed_changes_the_workload() {
        let config = small_config();
        let other = BenchmarkConfig {
            seed: 43,
            ..config
        };
        assert_ne!(
            generate_workload(&config, WorkloadKind::Mixed),
            generate_workload(&other, WorkloadKind::Mixed)
        );
    }

    #[test]
    fn test_workload_composition() {
        let config = small_config();

        let queries = generate_workload(&config, WorkloadKind::QueryHeavy);
        assert_eq!(queries.len(), config.operations);
        assert!(queries
            .iter()
            .all(|op| matches!(op, Op::PrefixSum { index } if *index < config.size)));

        let updates = generate_workload(&config, WorkloadKind::UpdateHeavy);
        assert!(updates.iter().all(|op| matches!(
            op,
            Op::Update { index, delta }
                if *index < config.size && (MIN_DELTA..=MAX_DELTA).contains(delta)
        )));

        let mixed = generate_workload(&config, WorkloadKind::Mixed);
        let query_count = mixed
            .iter()
            .filter(|op| matches!(op, Op::PrefixSum { .. }))
            .count();
        // 500 coin flips; both sides must show up well away from the edges.
        assert!(query_count > 150 && query_count < 350);
    }

    #[test]
    fn test_run_workload_applies_updates() {
        let ops = [
            Op::Update { index: 0, delta: 5 },
            Op::PrefixSum { index: 3 },
            Op::Update { index: 2, delta: 3 },
        ];
        let mut tree = FenwickTree::new(4).unwrap();
        run_workload(&mut tree, &ops);
        assert_eq!(tree.prefix_sum(3), 8);
    }

    #[test]
    fn test_run_benchmark_produces_full_report() {
        let config = small_config();
        let reports = run_benchmark(&config).unwrap();
        assert_eq!(reports.len(), 3);
        for report in &reports {
            assert_eq!(report.timings.len(), 3);
        }
        assert_eq!(reports[0].kind, WorkloadKind::QueryHeavy);
        assert_eq!(reports[1].kind, WorkloadKind::UpdateHeavy);
        assert_eq!(reports[2].kind, WorkloadKind::Mixed);
    }

    #[test]
    fn test_run_benchmark_rejects_zero_size() {
        let config = BenchmarkConfig {
            size: 0,
            operations: 10,
            seed: 42,
        };
        assert!(run_benchmark(&config).unwrap_err().is_size_error());
    }

    #[test]
    fn test_report_rendering() {
        let config = small_config();
        let reports = run_benchmark(&config).unwrap();
        let rendered = render_report(&config, &reports);

        assert!(rendered.contains("Array size: 64"));
        assert!(rendered.contains("=== Test 1: 100% queries ==="));
        assert!(rendered.contains("=== Test 2: 100% updates ==="));
        assert!(rendered.contains("=== Test 3: 50% queries + 50% updates ==="));
        assert!(rendered.contains("Fenwick tree:"));
        assert!(rendered.contains("Naive (sum on query):"));
        assert!(rendered.contains("Naive (prefix array):"));
        // Every timing section ends with a blank line.
        assert!(rendered.contains("ms\n\n"));
        assert_eq!(rendered.matches("* ").count(), CONCLUSIONS.len());
    }
}
