//! Per-block harmonizer pipeline.
//!
//! `Harmonizer` owns every piece of audio-callback state and wires it
//! together in the order one block flows through:
//!
//! ```text
//! input block ──► WindowBuffer::append
//!             ──► FrequencyEstimator::process_block  (zero crossings, snapshot)
//!             ──► every N blocks: FFT peak over the latest window samples
//!             ──► HarmonicOscillatorBank::set_frequency(tracked fundamental)
//!             ──► HarmonicOscillatorBank::process ──► four output channels
//! ```
//!
//! Construction allocates (window storage, FFT plan). After that
//! `process_block` and `handle` are allocation-free and never block.

pub mod message;
pub mod telemetry;

pub use message::{ControlMessage, MessageReceiver};
pub use telemetry::Telemetry;

use crate::{
    analysis::FrequencyEstimator,
    config::{HarmonizerConfig, TrackingSource},
    dsp::WindowBuffer,
    synth::HarmonicOscillatorBank,
    Result, SNAPSHOT_LEN, VOICE_COUNT,
};

pub struct Harmonizer {
    config: HarmonizerConfig,
    window: WindowBuffer,
    estimator: FrequencyEstimator,
    bank: HarmonicOscillatorBank,
    /// Latest `fft_size` window samples handed to the spectral estimate
    spectral_input: Vec<f32>,
    blocks_since_spectral: usize,
    holding: bool,
}

impl Harmonizer {
    pub fn new(config: HarmonizerConfig) -> Result<Self> {
        if let Err(err) = config.validate() {
            tracing::warn!(%err, "rejected harmonizer config");
            return Err(err);
        }

        let mut bank = HarmonicOscillatorBank::new(config.sample_rate, config.amplitude);
        bank.start(config.initial_frequency);

        tracing::info!(
            sample_rate = config.sample_rate,
            block_size = config.block_size,
            buffer_capacity = config.buffer_capacity,
            fft_size = config.fft_size,
            spectral_interval = config.spectral_interval,
            tracking = ?config.tracking,
            "harmonizer ready"
        );

        Ok(Self {
            window: WindowBuffer::new(config.buffer_capacity),
            estimator: FrequencyEstimator::new(config.sample_rate, config.fft_size),
            bank,
            spectral_input: vec![0.0; config.fft_size],
            blocks_since_spectral: 0,
            holding: false,
            config,
        })
    }

    /// Analyze one input block and render one block per voice.
    ///
    /// Each output channel receives as many frames as the shortest channel
    /// slice; callers normally size them to `input.len()`.
    pub fn process_block(&mut self, input: &[f32], out: &mut [&mut [f32]; VOICE_COUNT]) {
        self.window.append(input);
        self.estimator.process_block(input);

        self.blocks_since_spectral = self.blocks_since_spectral.saturating_add(1);
        if self.blocks_since_spectral >= self.config.spectral_interval
            && self.window.len() >= self.spectral_input.len()
        {
            self.window.copy_latest(&mut self.spectral_input);
            self.estimator.analyze_spectrum(&self.spectral_input);
            self.blocks_since_spectral = 0;
        }

        if !self.holding {
            let detected = self.tracked_frequency();
            // Zero means nothing detected yet; keep the last tuning.
            if detected > 0.0 && detected != self.bank.fundamental() {
                self.bank.set_frequency(detected);
            }
        }

        self.bank.process(out);
    }

    pub fn handle(&mut self, message: ControlMessage) {
        match message {
            ControlMessage::StartSnapshot => self.estimator.start_snapshot(),
            ControlMessage::CompleteSnapshot => self.estimator.complete_snapshot(),
            ControlMessage::ResetTracking => self.estimator.reset(),
            ControlMessage::SetFrequency(frequency) => {
                if frequency.is_finite() && frequency >= 0.0 {
                    self.bank.set_frequency(frequency);
                }
            }
            ControlMessage::Hold(holding) => self.holding = holding,
        }
    }

    /// Apply every pending control message.
    pub fn drain_messages<R: MessageReceiver>(&mut self, rx: &mut R) {
        while let Some(message) = rx.pop() {
            self.handle(message);
        }
    }

    /// Estimate selected by the configured tracking source.
    pub fn tracked_frequency(&self) -> f32 {
        match self.config.tracking {
            TrackingSource::ZeroCrossing => self.estimator.zero_crossing_frequency(),
            TrackingSource::Spectral => self.estimator.spectral_frequency(),
        }
    }

    pub fn telemetry(&self) -> Telemetry {
        let snapshot = self
            .estimator
            .check_snapshot()
            .then(|| (*self.estimator.snapshot(), self.estimator.snapshot_len()));

        let mut recent = [0.0; SNAPSHOT_LEN];
        let recent_len = self.window.copy_latest(&mut recent);

        Telemetry {
            zero_crossing_hz: self.estimator.zero_crossing_frequency(),
            spectral_hz: self.estimator.spectral_frequency(),
            fundamental_hz: self.bank.fundamental(),
            buffer_fill: self.window.len(),
            buffer_capacity: self.window.capacity(),
            holding: self.holding,
            snapshot,
            recent,
            recent_len,
        }
    }

    pub fn config(&self) -> &HarmonizerConfig {
        &self.config
    }

    pub fn estimator(&self) -> &FrequencyEstimator {
        &self.estimator
    }

    pub fn bank(&self) -> &HarmonicOscillatorBank {
        &self.bank
    }

    pub fn window(&self) -> &WindowBuffer {
        &self.window
    }

    pub fn is_holding(&self) -> bool {
        self.holding
    }
}
