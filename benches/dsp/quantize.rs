//! Benchmarks for quantizer lookups.

use std::hint::black_box;

use brightwave::quantize::Quantizer;
use criterion::Criterion;

pub fn bench_quantize(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/quantize");
    let quantizer = Quantizer::default();

    // First interval, middle, and clamped above the table
    for (name, input) in [("low", 225.0f32), ("mid", 440.0), ("clamped", 2_000.0)] {
        group.bench_function(name, |b| {
            b.iter(|| black_box(quantizer.remap(black_box(input))))
        });
    }

    group.finish();
}
