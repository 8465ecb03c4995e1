pub mod analysis; // Pitch estimation (zero crossings, spectral peak, snapshots)
pub mod config;
pub mod dsp;
pub mod engine; // Per-block harmonizer pipeline
pub mod error;
pub mod io;
pub mod quantize;
pub mod synth; // Harmonic oscillator bank

pub use config::{HarmonizerConfig, TrackingSource};
pub use engine::{ControlMessage, Harmonizer, Telemetry};
pub use error::{Error, Result};

pub const MAX_BLOCK_SIZE: usize = 2048;

/// Number of raw samples captured by an armed snapshot.
pub const SNAPSHOT_LEN: usize = 48;

/// Number of voices (and output channels) in the harmonic oscillator bank.
pub const VOICE_COUNT: usize = 4;
