//! FFT peak-picking frequency estimate.
//!
//! The block is windowed (Hamming), transformed with a forward FFT, and the
//! frequency of the strongest bin is reported:
//!
//! ```text
//! frequency = peak_bin * sample_rate / fft_size
//! ```
//!
//! Resolution is one bin (`sample_rate / fft_size`, ~47 Hz for 1024 points at
//! 48 kHz). The DC bin is skipped so an offset on the input cannot win. Cost is
//! O(n log n); the engine throttles how often this runs.

use rustfft::{num_complex::Complex, Fft, FftPlanner};
use std::sync::Arc;

use crate::dsp::window::hamming;

pub struct SpectralPeak {
    sample_rate: f32,
    /// Hamming window coefficients
    window: Vec<f32>,
    fft: Arc<dyn Fft<f32>>,
    /// In-place transform buffer
    spectrum: Vec<Complex<f32>>,
    /// Scratch space required by rustfft
    scratch: Vec<Complex<f32>>,
    /// Magnitude spectrum of the last analysis (bins 0..=n/2)
    magnitudes: Vec<f32>,
    frequency: f32,
}

impl SpectralPeak {
    /// Plan a transform of `fft_size` points. Allocates; call outside the
    /// audio callback.
    pub fn new(fft_size: usize, sample_rate: f32) -> Self {
        let fft_size = fft_size.max(2);
        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(fft_size);

        let mut window = vec![0.0; fft_size];
        hamming(&mut window);

        let scratch = vec![Complex::new(0.0, 0.0); fft.get_inplace_scratch_len()];

        tracing::debug!(fft_size, sample_rate, "planned spectral peak transform");

        Self {
            sample_rate,
            window,
            fft,
            spectrum: vec![Complex::new(0.0, 0.0); fft_size],
            scratch,
            magnitudes: vec![0.0; fft_size / 2 + 1],
            frequency: 0.0,
        }
    }

    pub fn fft_size(&self) -> usize {
        self.window.len()
    }

    /// Analyze a block and return the (possibly unchanged) peak frequency.
    ///
    /// Shorter input is zero-padded and longer input is truncated to the FFT
    /// size. A block with no energy outside DC keeps the previous estimate.
    pub fn analyze(&mut self, samples: &[f32]) -> f32 {
        // Real input, zero imaginary part, windowed
        for (i, bin) in self.spectrum.iter_mut().enumerate() {
            let sample = samples.get(i).copied().unwrap_or(0.0);
            bin.re = sample * self.window[i];
            bin.im = 0.0;
        }

        self.fft
            .process_with_scratch(&mut self.spectrum, &mut self.scratch);

        for (magnitude, bin) in self.magnitudes.iter_mut().zip(&self.spectrum) {
            *magnitude = bin.norm();
        }

        if let Some(peak) = self.peak_bin() {
            self.frequency = peak as f32 * self.sample_rate / self.fft_size() as f32;
        }

        self.frequency
    }

    /// Index of the strongest non-DC bin, if any bin has energy.
    fn peak_bin(&self) -> Option<usize> {
        let mut best: Option<(usize, f32)> = None;
        for (idx, &magnitude) in self.magnitudes.iter().enumerate().skip(1) {
            if !magnitude.is_finite() || magnitude <= 0.0 {
                continue;
            }
            match best {
                Some((_, top)) if magnitude <= top => {}
                _ => best = Some((idx, magnitude)),
            }
        }
        best.map(|(idx, _)| idx)
    }

    pub fn frequency(&self) -> f32 {
        self.frequency
    }

    /// Magnitude spectrum (bins 0..=n/2) from the last analysis.
    pub fn magnitudes(&self) -> &[f32] {
        &self.magnitudes
    }

    /// Width of one bin in Hz.
    pub fn bin_width(&self) -> f32 {
        self.sample_rate / self.fft_size() as f32
    }
}
