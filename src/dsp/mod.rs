//! Low-level DSP primitives used by the analysis and synthesis layers.
//!
//! These components are allocation-free and realtime-safe once constructed,
//! making them safe to call from inside the audio callback. They stay focused
//! on the signal-processing math so the engine can layer on orchestration.

/// Sine oscillator with a phase accumulator.
pub mod oscillator;
/// Zero-crossing predicate and frequency folding helpers.
pub mod pitch;
/// Analysis window coefficients.
pub mod window;
/// Sliding window over the most recent input samples.
pub mod window_buffer;

pub use oscillator::OscillatorBlock;
pub use window_buffer::WindowBuffer;
