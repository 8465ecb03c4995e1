//! Benchmarks for the four-voice harmonic oscillator bank.

use std::hint::black_box;

use brightwave::synth::HarmonicOscillatorBank;
use criterion::{BenchmarkId, Criterion};

use crate::BLOCK_SIZES;

pub fn bench_harmonic(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/harmonic");

    for &size in BLOCK_SIZES {
        let mut channels: [Vec<f32>; 4] = std::array::from_fn(|_| vec![0.0; size]);

        // Four sines per frame - sin() dominates
        let mut bank = HarmonicOscillatorBank::new(48_000.0, 0.7);
        bank.start(440.0);
        group.bench_with_input(BenchmarkId::new("process", size), &size, |b, _| {
            b.iter(|| {
                let mut out = channels.each_mut().map(|c| c.as_mut_slice());
                bank.process(black_box(&mut out));
            })
        });

        // Re-tune every block, as pitch tracking does
        let mut bank = HarmonicOscillatorBank::new(48_000.0, 0.7);
        bank.start(440.0);
        let mut frequency = 440.0f32;
        group.bench_with_input(BenchmarkId::new("retune_and_process", size), &size, |b, _| {
            b.iter(|| {
                frequency = if frequency > 880.0 { 440.0 } else { frequency * 1.01 };
                bank.set_frequency(black_box(frequency));
                let mut out = channels.each_mut().map(|c| c.as_mut_slice());
                bank.process(black_box(&mut out));
            })
        });
    }

    group.finish();
}
