//! Benchmarks for the FFT peak estimate.
//!
//! Compare against the block deadline to pick a spectral interval: at 1024
//! points this is typically several blocks' worth of budget.

use std::hint::black_box;

use brightwave::analysis::SpectralPeak;
use criterion::{BenchmarkId, Criterion};

use super::sine;

const FFT_SIZES: &[usize] = &[256, 1024, 4096];

pub fn bench_spectral(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/spectral");

    for &size in FFT_SIZES {
        let signal = sine(440.0, size);
        let mut peak = SpectralPeak::new(size, 48_000.0);
        group.bench_with_input(BenchmarkId::new("analyze", size), &size, |b, _| {
            b.iter(|| {
                black_box(peak.analyze(black_box(&signal)));
            })
        });
    }

    group.finish();
}
