//! Benchmarks for the sliding analysis window.

use std::hint::black_box;

use brightwave::dsp::WindowBuffer;
use criterion::{BenchmarkId, Criterion};

use super::sine;
use crate::BLOCK_SIZES;

pub fn bench_window_buffer(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/window_buffer");

    for &size in BLOCK_SIZES {
        let block = sine(440.0, size);

        // Steady state: window already full, every append evicts
        let mut window = WindowBuffer::new(4096);
        window.append(&sine(440.0, 4096));
        group.bench_with_input(BenchmarkId::new("append_full", size), &size, |b, _| {
            b.iter(|| {
                window.append(black_box(&block));
            })
        });
    }

    // Pulling the latest FFT input out of a full window
    let mut window = WindowBuffer::new(4096);
    window.append(&sine(440.0, 4096));
    let mut dest = vec![0.0f32; 1024];
    group.bench_function("copy_latest_1024", |b| {
        b.iter(|| {
            black_box(window.copy_latest(black_box(&mut dest)));
        })
    });

    group.finish();
}
