//! Pitch analysis of the incoming signal.
//!
//! Two independent estimates are kept side by side: a cheap zero-crossing
//! tracker updated every block, and a windowed FFT peak that callers run at a
//! reduced rate. A fixed-length raw snapshot can be captured on demand for
//! display.

/// Zero-crossing tracker and FFT peak combined, plus snapshot capture.
pub mod estimator;
/// Arm/capture/complete raw sample snapshot.
pub mod snapshot;
/// Windowed FFT peak-picking estimate.
pub mod spectral;
/// Interval between consecutive zero crossings.
pub mod zero_crossing;

pub use estimator::FrequencyEstimator;
pub use snapshot::Snapshot;
pub use spectral::SpectralPeak;
pub use zero_crossing::ZeroCrossingTracker;
