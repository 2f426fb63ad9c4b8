use criterion::*;
use std::hint::black_box;

use uniformity::{execute, run_worker, SampleConfig, SilentProgress, SquareStep};

fn generator_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("generator");

    group.throughput(Throughput::Elements(1_000_000));
    group.bench_function("advance_1M", |b| {
        b.iter(|| {
            let mut generator = SquareStep::new(black_box(0x9E37_79B9_7F4A_7C15), 6);
            let mut acc = 0u64;
            for _ in 0..1_000_000 {
                acc ^= generator.advance();
            }
            black_box(acc)
        })
    });

    group.finish();
}

fn worker_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("worker");

    group.throughput(Throughput::Elements(1_000_000));
    group.bench_function("run_1M_6_buckets", |b| {
        let config = SampleConfig::new(6, 1_000_000, 1).unwrap();
        b.iter(|| {
            let result = run_worker(0, black_box(12345), &config, &SilentProgress);
            black_box(result.samples())
        })
    });

    group.finish();
}

fn sweep_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("sweep");

    group.throughput(Throughput::Elements(1_000_000));
    group.bench_function("execute_4x250k", |b| {
        let config = SampleConfig::new(6, 250_000, 4).unwrap();
        let seeds = [1u64, 2, 3, 4];
        b.iter(|| {
            let result = execute(&config, black_box(&seeds)).unwrap();
            black_box(result.overall_mean)
        })
    });

    group.finish();
}

criterion_group!(benches, generator_benchmark, worker_benchmark, sweep_benchmark);
criterion_main!(benches);
