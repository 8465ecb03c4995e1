use crate::dsp::pitch::is_zero_crossing;

/*
Zero-Crossing Frequency Tracking
================================

We count samples since the last reset and remember where the most recent
zero crossing happened. The distance between two consecutive crossings gives
the estimate:

    frequency = sample_rate / (sample_count - last_crossing)

For a clean sine, consecutive crossings are half a period apart, so the
reported value is twice the true pitch: a 100 Hz sine at 48 kHz crosses every
240 samples and reads as 200 Hz. No halving is applied; downstream tuning is
calibrated against this value.

    ───╮     ╭───╮     ╭───
       │     │   │     │
       ╰─────╯   ╰─────╯
       ^     ^   ^
       c0    c1  c2       interval = c1 - c0

The first crossing after a reset only latches a position. It takes a second
one to measure an interval, so until then the estimate stays at its previous
value (0 after a reset). Blocks without any crossing also leave it alone.
*/

pub struct ZeroCrossingTracker {
    sample_rate: f32,
    /// Previous sample, `None` until the first sample after reset.
    last_sample: Option<f32>,
    /// Sample index of the latest crossing, `None` until one is seen.
    last_crossing: Option<u64>,
    /// Samples processed since reset.
    sample_count: u64,
    frequency: f32,
}

impl ZeroCrossingTracker {
    pub fn new(sample_rate: f32) -> Self {
        Self {
            sample_rate,
            last_sample: None,
            last_crossing: None,
            sample_count: 0,
            frequency: 0.0,
        }
    }

    /// Scan one block and return the (possibly unchanged) estimate.
    pub fn process(&mut self, samples: &[f32]) -> f32 {
        for &sample in samples {
            if let Some(last) = self.last_sample {
                if is_zero_crossing(last, sample) {
                    self.on_crossing();
                }
            }

            self.last_sample = Some(sample);
            self.sample_count += 1;
        }

        self.frequency
    }

    fn on_crossing(&mut self) {
        if let Some(previous) = self.last_crossing {
            let interval = self.sample_count - previous;
            if interval > 0 {
                self.frequency = self.sample_rate / interval as f32;
            }
        }
        self.last_crossing = Some(self.sample_count);
    }

    /// Forget all history, including the current estimate.
    pub fn reset(&mut self) {
        self.last_sample = None;
        self.last_crossing = None;
        self.sample_count = 0;
        self.frequency = 0.0;
    }

    pub fn frequency(&self) -> f32 {
        self.frequency
    }

    pub fn sample_count(&self) -> u64 {
        self.sample_count
    }

    pub fn last_crossing(&self) -> Option<u64> {
        self.last_crossing
    }
}
