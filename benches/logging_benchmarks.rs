//! Criterion benchmarks for logspool

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use logspool::prelude::*;
use logspool::sinks::render_line;
use tempfile::TempDir;

// ============================================================================
// Producer-side Benchmarks
// ============================================================================

fn bench_enqueue(c: &mut Criterion) {
    let mut group = c.benchmark_group("enqueue");
    group.throughput(Throughput::Elements(1));

    let dir = TempDir::new().expect("Failed to create temp dir");
    let file_logger = Logger::builder()
        .file(dir.path().join("bench.log"))
        .build()
        .expect("Failed to build logger");

    group.bench_function("file_backend", |b| {
        b.iter(|| {
            logspool::info!(file_logger, "benchmark message {}", black_box(42));
        });
    });

    let structured_logger = Logger::init().expect("Failed to init logger");
    group.bench_function("structured_backend", |b| {
        b.iter(|| {
            logspool::info!(structured_logger, "benchmark message {}", black_box(42));
        });
    });

    group.finish();
}

// ============================================================================
// Rendering Benchmarks
// ============================================================================

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    group.throughput(Throughput::Elements(1));

    let located = LogRecord::new(
        LogLevel::Info,
        "src/server.rs",
        42,
        "server::start",
        "listening on port 8080",
    );
    group.bench_function("located_line", |b| {
        b.iter(|| render_line(black_box(&located)));
    });

    let bare = LogRecord::new(
        LogLevel::Notice,
        "src/server.rs",
        42,
        "server::start",
        "listening on port 8080",
    );
    group.bench_function("bare_line", |b| {
        b.iter(|| render_line(black_box(&bare)));
    });

    group.finish();
}

criterion_group!(benches, bench_enqueue, bench_render);
criterion_main!(benches);
