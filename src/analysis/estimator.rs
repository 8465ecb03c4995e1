use crate::{
    analysis::{snapshot::Snapshot, spectral::SpectralPeak, zero_crossing::ZeroCrossingTracker},
    SNAPSHOT_LEN,
};

/// Dual pitch estimator fed by the audio callback.
///
/// The zero-crossing estimate updates on every block. The spectral estimate
/// only changes when [`analyze_spectrum`](Self::analyze_spectrum) is called,
/// and the two are never merged. Snapshot capture piggybacks on block
/// processing.
pub struct FrequencyEstimator {
    zero_crossing: ZeroCrossingTracker,
    spectral: SpectralPeak,
    snapshot: Snapshot,
}

impl FrequencyEstimator {
    pub fn new(sample_rate: f32, fft_size: usize) -> Self {
        Self {
            zero_crossing: ZeroCrossingTracker::new(sample_rate),
            spectral: SpectralPeak::new(fft_size, sample_rate),
            snapshot: Snapshot::new(),
        }
    }

    /// Per-block update: zero-crossing scan plus snapshot capture if armed.
    pub fn process_block(&mut self, samples: &[f32]) -> f32 {
        let frequency = self.zero_crossing.process(samples);
        self.snapshot.capture(samples);
        frequency
    }

    /// Run the FFT peak estimate on `samples`. Too expensive for every block.
    pub fn analyze_spectrum(&mut self, samples: &[f32]) -> f32 {
        self.spectral.analyze(samples)
    }

    /// Clear zero-crossing history. Spectral and snapshot state are kept.
    pub fn reset(&mut self) {
        self.zero_crossing.reset();
    }

    pub fn zero_crossing_frequency(&self) -> f32 {
        self.zero_crossing.frequency()
    }

    pub fn spectral_frequency(&self) -> f32 {
        self.spectral.frequency()
    }

    pub fn fft_size(&self) -> usize {
        self.spectral.fft_size()
    }

    pub fn start_snapshot(&mut self) {
        self.snapshot.arm();
    }

    /// True once an armed capture has been filled.
    pub fn check_snapshot(&self) -> bool {
        self.snapshot.is_ready()
    }

    pub fn complete_snapshot(&mut self) {
        self.snapshot.complete();
    }

    pub fn snapshot(&self) -> &[f32; SNAPSHOT_LEN] {
        self.snapshot.samples()
    }

    pub fn snapshot_len(&self) -> usize {
        self.snapshot.captured_len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::TAU;

    const SAMPLE_RATE: f32 = 48_000.0;

    fn sine(frequency: f32, len: usize) -> Vec<f32> {
        (0..len)
            .map(|n| (TAU * frequency * n as f32 / SAMPLE_RATE).sin())
            .collect()
    }

    #[test]
    fn estimates_are_independent() {
        let mut estimator = FrequencyEstimator::new(SAMPLE_RATE, 1024);
        let signal = sine(375.0, 2048);

        for block in signal.chunks(48) {
            estimator.process_block(block);
        }
        assert!(estimator.zero_crossing_frequency() > 0.0);
        assert_eq!(estimator.spectral_frequency(), 0.0);

        estimator.analyze_spectrum(&signal[..1024]);
        // 375 Hz sits exactly on bin 8.
        assert_eq!(estimator.spectral_frequency(), 375.0);
        assert!((estimator.zero_crossing_frequency() - 750.0).abs() < 10.0);
    }

    #[test]
    fn reset_keeps_spectral_and_snapshot() {
        let mut estimator = FrequencyEstimator::new(SAMPLE_RATE, 1024);
        let signal = sine(375.0, 1024);
        estimator.analyze_spectrum(&signal);
        estimator.start_snapshot();
        estimator.process_block(&signal[..48]);

        estimator.reset();

        assert_eq!(estimator.zero_crossing_frequency(), 0.0);
        assert_eq!(estimator.spectral_frequency(), 375.0);
        assert!(estimator.check_snapshot());
    }

    #[test]
    fn snapshot_round_trip() {
        let mut estimator = FrequencyEstimator::new(SAMPLE_RATE, 1024);
        let block: Vec<f32> = (0..48).map(|i| i as f32 * 0.01).collect();

        estimator.process_block(&block);
        assert!(!estimator.check_snapshot());

        estimator.start_snapshot();
        estimator.process_block(&block);
        assert!(estimator.check_snapshot());
        assert_eq!(&estimator.snapshot()[..], &block[..]);
        assert_eq!(estimator.snapshot_len(), 48);

        estimator.complete_snapshot();
        assert!(!estimator.check_snapshot());
    }
}
