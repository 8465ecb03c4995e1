//! Benchmarks for low-level DSP primitives.

mod harmonic;
mod quantize;
mod spectral;
mod window_buffer;
mod zero_crossing;

pub use harmonic::bench_harmonic;
pub use quantize::bench_quantize;
pub use spectral::bench_spectral;
pub use window_buffer::bench_window_buffer;
pub use zero_crossing::bench_zero_crossing;

use std::f32::consts::TAU;

/// `len` samples of a unit sine at `frequency` Hz, sampled at 48 kHz.
pub fn sine(frequency: f32, len: usize) -> Vec<f32> {
    (0..len)
        .map(|n| (TAU * frequency * n as f32 / 48_000.0).sin())
        .collect()
}
