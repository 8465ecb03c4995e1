//! Harmonizer configuration.
//!
//! All tunables are owned by a `HarmonizerConfig` value that is handed to the
//! engine at construction time. Nothing is read from process-wide globals, so
//! tests can build engines with alternate rates, capacities and tables.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Error, Result, MAX_BLOCK_SIZE};

/// Which estimate drives the oscillator bank.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackingSource {
    /// Per-block zero-crossing estimate (low latency).
    #[default]
    ZeroCrossing,
    /// Throttled FFT peak estimate (more robust, updates less often).
    Spectral,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, PartialEq)]
pub struct HarmonizerConfig {
    /// Audio sample rate in Hz.
    pub sample_rate: f32,
    /// Samples per audio callback.
    pub block_size: usize,
    /// Capacity of the sliding analysis window.
    pub buffer_capacity: usize,
    /// Transform length used by the spectral estimate.
    pub fft_size: usize,
    /// Blocks between spectral analyses.
    pub spectral_interval: usize,
    /// Output level of every voice (0.0 - 1.0).
    pub amplitude: f32,
    /// Fundamental the bank starts on before any pitch is detected.
    pub initial_frequency: f32,
    pub tracking: TrackingSource,
}

impl Default for HarmonizerConfig {
    fn default() -> Self {
        Self {
            sample_rate: 48_000.0,
            block_size: 48,
            buffer_capacity: 4096,
            fft_size: 1024,
            spectral_interval: 32,
            amplitude: 0.7,
            initial_frequency: 440.0,
            tracking: TrackingSource::ZeroCrossing,
        }
    }
}

impl HarmonizerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sample_rate(mut self, sample_rate: f32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    pub fn block_size(mut self, block_size: usize) -> Self {
        self.block_size = block_size;
        self
    }

    pub fn buffer_capacity(mut self, capacity: usize) -> Self {
        self.buffer_capacity = capacity;
        self
    }

    pub fn fft_size(mut self, fft_size: usize) -> Self {
        self.fft_size = fft_size;
        self
    }

    /// Run the spectral estimate once every `blocks` audio blocks.
    pub fn spectral_interval(mut self, blocks: usize) -> Self {
        self.spectral_interval = blocks;
        self
    }

    pub fn amplitude(mut self, amplitude: f32) -> Self {
        self.amplitude = amplitude;
        self
    }

    pub fn initial_frequency(mut self, frequency: f32) -> Self {
        self.initial_frequency = frequency;
        self
    }

    pub fn tracking(mut self, tracking: TrackingSource) -> Self {
        self.tracking = tracking;
        self
    }

    /// Deadline for one block in seconds (block size / sample rate).
    pub fn block_deadline(&self) -> f32 {
        self.block_size as f32 / self.sample_rate
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.sample_rate.is_finite() && self.sample_rate > 0.0) {
            return Err(Error::InvalidSampleRate(self.sample_rate));
        }
        if self.block_size == 0 || self.block_size > MAX_BLOCK_SIZE {
            return Err(Error::InvalidBlockSize {
                got: self.block_size,
                max: MAX_BLOCK_SIZE,
            });
        }
        if self.buffer_capacity == 0 {
            return Err(Error::ZeroCapacity);
        }
        if self.fft_size < 2 {
            return Err(Error::InvalidFftSize(self.fft_size));
        }
        if self.fft_size > self.buffer_capacity {
            return Err(Error::FftLargerThanBuffer {
                fft_size: self.fft_size,
                capacity: self.buffer_capacity,
            });
        }
        if self.spectral_interval == 0 {
            return Err(Error::ZeroSpectralInterval);
        }
        if !(self.amplitude.is_finite() && (0.0..=1.0).contains(&self.amplitude)) {
            return Err(Error::InvalidAmplitude(self.amplitude));
        }
        if !(self.initial_frequency.is_finite() && self.initial_frequency >= 0.0) {
            return Err(Error::InvalidFrequency(self.initial_frequency));
        }
        Ok(())
    }
}
