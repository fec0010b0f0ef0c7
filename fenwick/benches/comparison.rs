use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fenwick::{
    generate_workload, run_workload, BenchmarkConfig, FenwickTree, NaivePrefixArray,
    NaiveSumOnQuery, WorkloadKind,
};

const SIZE: usize = 10_000;

fn populated_values() -> Vec<i64> {
    (0..SIZE).map(|i| (i % 7) as i64).collect()
}

fn prefix_sum_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("prefix_sum");

    let values = populated_values();
    let fenwick = FenwickTree::from_slice(&values).unwrap();

    let mut sum_on_query = NaiveSumOnQuery::new(SIZE).unwrap();
    let mut prefix_array = NaivePrefixArray::new(SIZE).unwrap();
    for (i, &v) in values.iter().enumerate() {
        sum_on_query.update(i, v);
        prefix_array.update(i, v);
    }

    // Stride through the array so queries cover short and long prefixes.
    group.bench_function("fenwick", |b| {
        let mut i = 0;
        b.iter(|| {
            i = (i + 4_097) % SIZE;
            black_box(fenwick.prefix_sum(black_box(i)))
        })
    });

    group.bench_function("naive_sum_on_query", |b| {
        let mut i = 0;
        b.iter(|| {
            i = (i + 4_097) % SIZE;
            black_box(sum_on_query.prefix_sum(black_box(i)))
        })
    });

    group.bench_function("naive_prefix_array", |b| {
        let mut i = 0;
        b.iter(|| {
            i = (i + 4_097) % SIZE;
            black_box(prefix_array.prefix_sum(black_box(i)))
        })
    });

    group.finish();
}

fn update_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("update");

    let mut fenwick = FenwickTree::new(SIZE).unwrap();
    let mut sum_on_query = NaiveSumOnQuery::new(SIZE).unwrap();
    let mut prefix_array = NaivePrefixArray::new(SIZE).unwrap();

    group.bench_function("fenwick", |b| {
        let mut i = 0;
        b.iter(|| {
            i = (i + 4_097) % SIZE;
            fenwick.update(black_box(i), black_box(1));
        })
    });

    group.bench_function("naive_sum_on_query", |b| {
        let mut i = 0;
        b.iter(|| {
            i = (i + 4_097) % SIZE;
            sum_on_query.update(black_box(i), black_box(1));
        })
    });

    group.bench_function("naive_prefix_array", |b| {
        let mut i = 0;
        b.iter(|| {
            i = (i + 4_097) % SIZE;
            prefix_array.update(black_box(i), black_box(1));
        })
    });

    group.finish();
}

fn workload_benchmark(c: &mut Criterion) {
    // Whole-workload replays, structure built fresh each iteration so every
    // replay starts from the same state.
    let config = BenchmarkConfig {
        size: 1_024,
        operations: 512,
        seed: 42,
    };

    for kind in WorkloadKind::all() {
        let group_name = match kind {
            WorkloadKind::QueryHeavy => "workload_query_heavy",
            WorkloadKind::UpdateHeavy => "workload_update_heavy",
            WorkloadKind::Mixed => "workload_mixed",
        };
        let mut group = c.benchmark_group(group_name);
        let ops = generate_workload(&config, kind);

        group.bench_function("fenwick", |b| {
            b.iter(|| {
                let mut tree = FenwickTree::new(config.size).unwrap();
                run_workload(&mut tree, black_box(&ops));
                black_box(tree);
            })
        });

        group.bench_function("naive_sum_on_query", |b| {
            b.iter(|| {
                let mut arr = NaiveSumOnQuery::new(config.size).unwrap();
                run_workload(&mut arr, black_box(&ops));
                black_box(arr);
            })
        });

        group.bench_function("naive_prefix_array", |b| {
            b.iter(|| {
                let mut arr = NaivePrefixArray::new(config.size).unwrap();
                run_workload(&mut arr, black_box(&ops));
                black_box(arr);
            })
        });

        group.finish();
    }
}

criterion_group!(
    benches,
    prefix_sum_benchmark,
    update_benchmark,
    workload_benchmark
);
criterion_main!(benches);
