//! Scanner Benchmarks
//!
//! Run with: `cargo bench --package loxc-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

fn token_count(source: &str) -> usize {
    loxc_lex::scan(source).map(|s| s.tokens.len()).unwrap_or(0)
}

fn bench_scanner_simple(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanner");

    let source = "(5 + 3) == 8; { 1.5 * 2 } != 4 / 2;";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("expression", |b| {
        b.iter(|| token_count(black_box("(5 + 3) == 8")))
    });

    group.bench_function("statement_line", |b| {
        b.iter(|| token_count(black_box(source)))
    });

    group.finish();
}

fn bench_scanner_large(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanner_large");

    let chunk = r#"
        // running total
        { (10 + 20.5) * 3 >= 4 / 2; "label" != "other"; }
        !(1 <= 2) == 3 > 4;
    "#;
    let source = chunk.repeat(500);
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("repeated_chunks", |b| {
        b.iter(|| token_count(black_box(&source)))
    });

    group.bench_function("with_errors", |b| {
        let noisy = source.replace(';', "@;");
        b.iter(|| token_count(black_box(&noisy)))
    });

    group.finish();
}

criterion_group!(benches, bench_scanner_simple, bench_scanner_large);
criterion_main!(benches);
