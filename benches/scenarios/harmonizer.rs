//! Benchmarks for complete harmonizer blocks.

use std::hint::black_box;

use brightwave::{io::VoiceBuffers, Harmonizer, HarmonizerConfig};
use criterion::{BenchmarkId, Criterion};

use crate::dsp::sine;
use crate::BLOCK_SIZES;

pub fn bench_harmonizer(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/harmonizer");

    for &size in BLOCK_SIZES {
        let block = sine(220.0, size);
        let mut voices = VoiceBuffers::new();

        // === TYPICAL BLOCK ===
        // Spectral estimate effectively never due: zero crossings + bank only
        let config = HarmonizerConfig::new()
            .block_size(size)
            .spectral_interval(usize::MAX);
        let mut harmonizer = Harmonizer::new(config).expect("valid config");
        harmonizer.process_block(&sine(220.0, 4096), &mut voices.channels(size));

        group.bench_with_input(BenchmarkId::new("zero_crossing_only", size), &size, |b, _| {
            b.iter(|| {
                let mut out = voices.channels(size);
                harmonizer.process_block(black_box(&block), &mut out);
            })
        });

        // === WORST-CASE BLOCK ===
        // Spectral estimate runs on every block
        let config = HarmonizerConfig::new().block_size(size).spectral_interval(1);
        let mut harmonizer = Harmonizer::new(config).expect("valid config");
        harmonizer.process_block(&sine(220.0, 4096), &mut voices.channels(size));

        group.bench_with_input(BenchmarkId::new("with_spectral", size), &size, |b, _| {
            b.iter(|| {
                let mut out = voices.channels(size);
                harmonizer.process_block(black_box(&block), &mut out);
            })
        });
    }

    group.finish();
}
