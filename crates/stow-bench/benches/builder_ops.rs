//! Criterion micro-benchmarks for append and finalize across kinds.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use stow_bench::{build_all, sample_i64, sample_words, SIZES};
use stow_builder::GrowableBuilder;

fn bench_append_packed(c: &mut Criterion) {
    let mut group = c.benchmark_group("append_i64");
    for &n in &SIZES {
        let values = sample_i64(n, 42);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("fresh", n), &values, |b, values| {
            b.iter(|| {
                let mut builder = GrowableBuilder::<i64>::new();
                black_box(build_all(&mut builder, values.iter().copied()))
            });
        });
        group.bench_with_input(BenchmarkId::new("hinted", n), &values, |b, values| {
            b.iter(|| {
                let mut builder = GrowableBuilder::<i64>::new();
                builder.size_hint(values.len());
                black_box(build_all(&mut builder, values.iter().copied()))
            });
        });
        group.bench_with_input(BenchmarkId::new("reused", n), &values, |b, values| {
            let mut builder = GrowableBuilder::<i64>::new();
            b.iter(|| {
                builder.clear();
                black_box(build_all(&mut builder, values.iter().copied()))
            });
        });
    }
    group.finish();
}

fn bench_append_reference(c: &mut Criterion) {
    let mut group = c.benchmark_group("append_string");
    for &n in &SIZES[..3] {
        let words = sample_words(n, 42);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &words, |b, words| {
            b.iter(|| {
                let mut builder = GrowableBuilder::<String>::new();
                black_box(build_all(&mut builder, words.iter().cloned()))
            });
        });
    }
    group.finish();
}

fn bench_finalize_empty(c: &mut Criterion) {
    c.bench_function("finalize_empty_f64", |b| {
        b.iter(|| black_box(GrowableBuilder::<f64>::new().finalize()));
    });
}

criterion_group!(
    benches,
    bench_append_packed,
    bench_append_reference,
    bench_finalize_empty
);
criterion_main!(benches);
