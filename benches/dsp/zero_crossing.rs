//! Benchmarks for the zero-crossing tracker.

use std::hint::black_box;

use brightwave::analysis::ZeroCrossingTracker;
use criterion::{BenchmarkId, Criterion};

use super::sine;
use crate::BLOCK_SIZES;

pub fn bench_zero_crossing(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/zero_crossing");

    for &size in BLOCK_SIZES {
        // Low pitch - few crossings per block
        let block = sine(110.0, size);
        let mut tracker = ZeroCrossingTracker::new(48_000.0);
        group.bench_with_input(BenchmarkId::new("110hz", size), &size, |b, _| {
            b.iter(|| {
                black_box(tracker.process(black_box(&block)));
            })
        });

        // High pitch - a crossing every few samples
        let block = sine(4_000.0, size);
        let mut tracker = ZeroCrossingTracker::new(48_000.0);
        group.bench_with_input(BenchmarkId::new("4khz", size), &size, |b, _| {
            b.iter(|| {
                black_box(tracker.process(black_box(&block)));
            })
        });
    }

    group.finish();
}
