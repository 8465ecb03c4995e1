//! Errors raised while configuring the harmonizer.
//!
//! Nothing in the per-block audio path returns an error. Boundary conditions
//! there saturate, clamp or keep the previous value instead.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("sample rate must be positive and finite, got {0}")]
    InvalidSampleRate(f32),

    #[error("block size must be between 1 and {max}, got {got}")]
    InvalidBlockSize { got: usize, max: usize },

    #[error("buffer capacity must be greater than zero")]
    ZeroCapacity,

    #[error("fft size must be at least 2, got {0}")]
    InvalidFftSize(usize),

    #[error("fft size {fft_size} exceeds buffer capacity {capacity}")]
    FftLargerThanBuffer { fft_size: usize, capacity: usize },

    #[error("spectral interval must be at least one block")]
    ZeroSpectralInterval,

    #[error("amplitude must be finite and within 0.0..=1.0, got {0}")]
    InvalidAmplitude(f32),

    #[error("frequency must be finite and non-negative, got {0}")]
    InvalidFrequency(f32),

    #[error("quantization threshold {index} is not finite")]
    NonFiniteThreshold { index: usize },

    #[error(
        "quantization thresholds must be strictly increasing: \
         thresholds[{index}] = {lower} is not below thresholds[{next}] = {upper}",
        next = .index + 1
    )]
    NonIncreasingThresholds { index: usize, lower: f32, upper: f32 },
}
