//! Performance benchmarks for brace expansion
//!
//! Run with: cargo bench --bench expansion_benchmarks

use braces_api::Expander;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

/// Pattern with `count` sibling groups of `width` alternatives each
fn sibling_pattern(count: usize, width: usize) -> String {
    let group = format!(
        "{{{}}}",
        (0..width).map(|i| i.to_string()).collect::<Vec<_>>().join(",")
    );
    format!("pre{}post", vec![group; count].join("-"))
}

/// Pattern nesting `depth` groups inside one another
fn nested_pattern(depth: usize) -> String {
    let mut pattern = String::from("x");
    for level in 0..depth {
        pattern = format!("{level}{{a,b,{pattern}}}");
    }
    pattern
}

/// Benchmark growing numbers of sibling groups
fn bench_sibling_groups(c: &mut Criterion) {
    let mut group = c.benchmark_group("sibling_groups");
    let expander = Expander::new();

    for count in [1, 2, 4, 6] {
        let pattern = sibling_pattern(count, 3);
        let words = expander.expand(&pattern).len();

        group.throughput(Throughput::Elements(words as u64));
        group.bench_with_input(BenchmarkId::new("expand", count), &pattern, |b, pattern| {
            b.iter(|| expander.expand(black_box(pattern)));
        });
    }

    group.finish();
}

/// Benchmark growing nesting depth
fn bench_nesting_depth(c: &mut Criterion) {
    let mut group = c.benchmark_group("nesting_depth");
    let expander = Expander::new();

    for depth in [1, 8, 32, 128] {
        let pattern = nested_pattern(depth);

        group.throughput(Throughput::Bytes(pattern.len() as u64));
        group.bench_with_input(BenchmarkId::new("expand", depth), &pattern, |b, pattern| {
            b.iter(|| expander.expand(black_box(pattern)));
        });
    }

    group.finish();
}

/// Benchmark long literal runs with no groups
fn bench_literal_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("literal_text");
    let expander = Expander::new();

    for size in [1024, 10_240, 102_400] {
        let text = "plain text, no groups here ".repeat(size / 27 + 1);

        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("expand", size), &text, |b, text| {
            b.iter(|| expander.expand_to_string(black_box(text)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_sibling_groups,
    bench_nesting_depth,
    bench_literal_text
);
criterion_main!(benches);
