//! Throughput benchmarks for both spacers
//!
//! Run with: cargo bench --bench spacing_benchmarks

use cjkspace_core::{enhanced_space, simple_space};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

/// Generate mixed CJK/Latin text of roughly the given byte size
fn generate_text(size: usize) -> String {
    let base = "这是一个测试sentence, it's mixed中文和English文本。";
    let repeat_count = size / base.len() + 1;
    base.repeat(repeat_count)
}

fn bench_spacers(c: &mut Criterion) {
    let mut group = c.benchmark_group("spacers");

    for size in [1024, 10_240, 102_400] {
        let text = generate_text(size);
        group.throughput(Throughput::Bytes(text.len() as u64));

        group.bench_with_input(BenchmarkId::new("simple", size), &text, |b, text| {
            b.iter(|| simple_space(black_box(text), false).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("enhanced", size), &text, |b, text| {
            b.iter(|| enhanced_space(black_box(text)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_spacers);
criterion_main!(benches);
