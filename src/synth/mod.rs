// Purpose: Harmonic voice synthesis
// This layer sits above the oscillator primitive and keeps four voices locked
// to fixed ratios of a tracked fundamental

pub mod harmonic;
pub mod voice;

pub use harmonic::{HarmonicOscillatorBank, HARMONIC_RATIOS};
pub use voice::HarmonicVoice;
