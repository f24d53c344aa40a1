//! Benchmarks for the per-record QC accumulators
//!
//! These measure the hot per-base loops (GC counting, Phred histogram
//! accumulation, N counting, alphabet validation) across realistic read
//! lengths, plus end-to-end throughput of the single-pass combined report
//! against three separate passes.
//!
//! Run with: cargo bench --bench qc_operations

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fastq_qc::qc::{GcCounter, NBaseCounter, QualityStats};
use fastq_qc::validate::is_valid_base;

/// Deterministic pseudo-DNA with ~1% N
fn generate_sequence(len: usize) -> Vec<u8> {
    (0..len)
        .map(|i| {
            if i % 100 == 99 {
                b'N'
            } else {
                [b'A', b'C', b'G', b'T'][i % 4]
            }
        })
        .collect()
}

/// Quality string mixing Q40 and Q12 (Phred+33)
fn generate_quality(len: usize) -> Vec<u8> {
    (0..len).map(|i| if i % 5 == 0 { b'-' } else { b'I' }).collect()
}

fn bench_gc_counter(c: &mut Criterion) {
    let mut group = c.benchmark_group("gc_counter");

    // Realistic read lengths: 100-300bp short reads, 10K long reads
    for size in [100, 150, 300, 10_000].iter() {
        let seq = generate_sequence(*size);
        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &seq, |b, seq| {
            b.iter(|| {
                let mut counter = GcCounter::new();
                counter.update(black_box(seq));
                black_box(counter.called_bases())
            });
        });
    }

    group.finish();
}

fn bench_quality_stats(c: &mut Criterion) {
    let mut group = c.benchmark_group("quality_stats");

    for size in [100, 150, 300, 10_000].iter() {
        let qual = generate_quality(*size);
        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &qual, |b, qual| {
            b.iter(|| {
                let mut stats = QualityStats::new();
                stats.update(black_box(qual));
                black_box(stats.total_bases())
            });
        });
    }

    group.finish();
}

fn bench_n_base_counter(c: &mut Criterion) {
    let mut group = c.benchmark_group("n_base_counter");

    for size in [100, 150, 300, 10_000].iter() {
        let seq = generate_sequence(*size);
        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &seq, |b, seq| {
            b.iter(|| {
                let mut counter = NBaseCounter::new();
                counter.update(black_box(seq));
                black_box(counter.total_bases())
            });
        });
    }

    group.finish();
}

fn bench_alphabet_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("alphabet_validation");

    for size in [150, 10_000].iter() {
        let seq = generate_sequence(*size);
        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &seq, |b, seq| {
            b.iter(|| black_box(seq).iter().all(|&base| is_valid_base(base)));
        });
    }

    group.finish();
}

fn bench_combined_vs_separate(c: &mut Criterion) {
    let mut group = c.benchmark_group("combined_accumulation");
    let seq = generate_sequence(150);
    let qual = generate_quality(150);
    let records = 1_000;

    group.throughput(Throughput::Elements(records as u64));
    group.bench_function("single_pass_three_metrics", |b| {
        b.iter(|| {
            let mut gc = GcCounter::new();
            let mut quality = QualityStats::new();
            let mut n = NBaseCounter::new();
            for _ in 0..records {
                gc.update(black_box(&seq));
                quality.update(black_box(&qual));
                n.update(black_box(&seq));
            }
            black_box((gc.called_bases(), quality.total_bases(), n.total_bases()))
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_gc_counter,
    bench_quality_stats,
    bench_n_base_counter,
    bench_alphabet_validation,
    bench_combined_vs_separate
);
criterion_main!(benches);
