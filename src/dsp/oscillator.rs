use std::f32::consts::TAU;

/*
Phase-Accumulating Sine Oscillator
==================================

  phase       Position within one cycle, kept in [0.0, 1.0).
  increment   How far phase advances per sample: frequency / sample_rate.

Each sample we output `amplitude * sin(2 * pi * phase)` and then advance the
phase, wrapping it back into [0, 1).

Changing frequency only changes the increment. The phase keeps running from
wherever it is, so the waveform bends to the new pitch without a jump. That
is what lets the harmonizer re-tune every block without clicks. Only
`reset()` moves the phase back to zero.
*/

pub struct OscillatorBlock {
    sample_rate: f32,
    frequency: f32,
    amplitude: f32,
    phase: f32,
    increment: f32,
}

impl OscillatorBlock {
    pub fn sine(sample_rate: f32, amplitude: f32) -> Self {
        Self {
            sample_rate,
            frequency: 0.0,
            amplitude,
            phase: 0.0,
            increment: 0.0,
        }
    }

    /// Re-tune without touching phase or amplitude.
    ///
    /// Negative values are clamped to 0 and non-finite values are ignored.
    pub fn set_frequency(&mut self, frequency: f32) {
        if !frequency.is_finite() {
            return;
        }
        self.frequency = frequency.max(0.0);
        self.increment = self.frequency / self.sample_rate;
    }

    /// Emit the sample at the current phase, then advance by one sample.
    #[inline]
    pub fn next_sample(&mut self) -> f32 {
        let sample = self.amplitude * (TAU * self.phase).sin();

        self.phase += self.increment;
        if self.phase >= 1.0 {
            self.phase = self.phase.fract();
        }

        sample
    }

    pub fn render(&mut self, buffer: &mut [f32]) {
        for sample in buffer.iter_mut() {
            *sample = self.next_sample();
        }
    }

    pub fn reset(&mut self) {
        self.phase = 0.0;
    }

    pub fn frequency(&self) -> f32 {
        self.frequency
    }

    pub fn amplitude(&self) -> f32 {
        self.amplitude
    }

    pub fn phase(&self) -> f32 {
        self.phase
    }
}
