//! Criterion benchmarks for threat_logger

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use std::collections::BTreeMap;
use threat_logger::prelude::*;
use threat_logger::{render_error, render_mapping, render_sequence, render_value, Scope};

// ============================================================================
// Rendering Benchmarks
// ============================================================================

fn bench_render_lines(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_lines");
    group.throughput(Throughput::Elements(1));

    let glyphs = Glyphs::emoji();
    let value = Value::from("artillery bombardment");
    let scope = Scope {
        prefix: "Alex ",
        name: "main",
    };

    group.bench_function("value", |b| {
        b.iter(|| render_value(&glyphs, black_box("barrage"), black_box(&value), None));
    });

    group.bench_function("value_scoped", |b| {
        b.iter(|| render_value(&glyphs, black_box("barrage"), black_box(&value), Some(scope)));
    });

    group.bench_function("error", |b| {
        b.iter(|| render_error(&glyphs, &black_box("connection reset"), black_box(3), None));
    });

    group.bench_function("value_ascii", |b| {
        let ascii = Glyphs::ascii();
        b.iter(|| render_value(&ascii, black_box("barrage"), black_box(&value), None));
    });

    group.finish();
}

fn bench_render_tables(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_tables");

    for size in [10usize, 100, 1000] {
        let items: Vec<u64> = (0..size as u64).collect();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(format!("sequence_{}", size), |b| {
            b.iter(|| render_sequence(black_box("items"), black_box(&items), DEFAULT_PADDING));
        });

        let map: BTreeMap<String, String> = (0..size)
            .map(|i| (format!("key{}", i), format!("value{}", i)))
            .collect();
        group.bench_function(format!("mapping_{}", size), |b| {
            b.iter(|| render_mapping(black_box("map"), black_box(&map), DEFAULT_PADDING));
        });
    }

    group.finish();
}

// ============================================================================
// End-to-end Benchmarks
// ============================================================================

fn bench_print_to_memory(c: &mut Criterion) {
    let mut group = c.benchmark_group("print_to_memory");
    group.throughput(Throughput::Elements(1));

    let buffer = MemoryDestination::new();
    let logger = Logger::builder()
        .destination(buffer.clone())
        .prefix("bench")
        .flags(FormatFlags::STD | FormatFlags::MICROSECONDS)
        .build();

    group.bench_function("print_value", |b| {
        b.iter(|| {
            logger.print_value(black_box("count"), black_box(42));
            if buffer.len() > 1 << 20 {
                buffer.clear();
            }
        });
    });

    group.bench_function("print_error", |b| {
        b.iter(|| {
            logger.print_error(black_box("timeout"), black_box(2));
            if buffer.len() > 1 << 20 {
                buffer.clear();
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_render_lines,
    bench_render_tables,
    bench_print_to_memory,
);
criterion_main!(benches);
