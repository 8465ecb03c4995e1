//! Real-world scenario benchmarks.
//!
//! These benchmarks model the audio callback: one full harmonizer block per
//! iteration, with and without the spectral estimate landing on it.

mod harmonizer;

pub use harmonizer::bench_harmonizer;
