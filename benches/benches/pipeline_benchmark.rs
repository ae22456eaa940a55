//! Parsing and post-processing benchmarks on synthetic quarter-hour data.
//!
//! Run with: `cargo bench --package enexory-bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use enexory_bench::{SyntheticConfig, synthetic_payload, synthetic_table};
use enexory_lib::{OutlierFilter, Pipeline, Step, forward_fill, parse_table, resample};
use std::hint::black_box;

/// Benchmark configurations for different data sizes.
fn benchmark_configs() -> Vec<(&'static str, SyntheticConfig)> {
    vec![
        (
            "10-days",
            SyntheticConfig {
                days: 10,
                ..Default::default()
            },
        ),
        ("30-days", SyntheticConfig::default()),
        (
            "1-year",
            SyntheticConfig {
                days: 365,
                ..Default::default()
            },
        ),
    ]
}

fn parse_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for (name, config) in benchmark_configs() {
        let (text, columns) = synthetic_payload(&config);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &text, |b, text| {
            b.iter(|| parse_table(black_box(text), &columns).unwrap());
        });
    }
    group.finish();
}

fn stage_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("stages");
    for (name, config) in benchmark_configs() {
        let table = synthetic_table(&config);
        group.throughput(Throughput::Elements(table.len() as u64));

        group.bench_with_input(BenchmarkId::new("resample", name), &table, |b, table| {
            b.iter(|| resample(black_box(table.clone()), Step::HOUR_4));
        });
        group.bench_with_input(BenchmarkId::new("outliers", name), &table, |b, table| {
            b.iter(|| OutlierFilter::default().apply(black_box(table.clone())));
        });
        group.bench_with_input(BenchmarkId::new("fill", name), &table, |b, table| {
            b.iter(|| forward_fill(black_box(table.clone())));
        });
    }
    group.finish();
}

fn pipeline_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    for step in [Step::MINUTE_15, Step::HOUR_1, Step::HOUR_4] {
        let table = synthetic_table(&SyntheticConfig::default());
        group.bench_with_input(BenchmarkId::from_parameter(step), &table, |b, table| {
            let pipeline = Pipeline::new(step);
            b.iter(|| pipeline.run(black_box(table.clone())));
        });
    }
    group.finish();
}

criterion_group!(benches, parse_benchmark, stage_benchmark, pipeline_benchmark);
criterion_main!(benches);
