//! Brightwave - audio device setup and the realtime callbacks

use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use rtrb::{Consumer, Producer, RingBuffer};

use super::ui::UiApp;

use brightwave::{
    io::VoiceBuffers, quantize::Quantizer, ControlMessage, Harmonizer, HarmonizerConfig,
    Telemetry, VOICE_COUNT,
};

/// Input ring capacity in blocks (absorbs jitter between the two streams)
const INPUT_RING_BLOCKS: usize = 64;
/// Send telemetry to the UI every N blocks (~16ms at 48 samples / 48 kHz)
const TELEMETRY_INTERVAL_BLOCKS: usize = 16;

/// Main application builder
pub struct Brightwave {
    config: HarmonizerConfig,
    quantizer: Quantizer,
}

impl Brightwave {
    pub fn new() -> Self {
        Self {
            config: HarmonizerConfig::default(),
            quantizer: Quantizer::default(),
        }
    }

    pub fn config(mut self, config: HarmonizerConfig) -> Self {
        self.config = config;
        self
    }

    /// Open the audio devices, start both streams and hand the terminal to
    /// the display until the user quits.
    pub fn run(self) -> EyreResult<()> {
        let host = cpal::default_host();
        let output_device = host
            .default_output_device()
            .ok_or_else(|| eyre!("no default output device available"))?;
        let input_device = host
            .default_input_device()
            .ok_or_else(|| eyre!("no default input device available"))?;

        let output_config = output_device
            .default_output_config()
            .wrap_err("failed to fetch default output config")?;
        let input_config = input_device
            .default_input_config()
            .wrap_err("failed to fetch default input config")?;

        let sample_rate = output_config.sample_rate().0 as f32;
        let output_channels = output_config.channels() as usize;
        let input_channels = input_config.channels() as usize;

        if input_config.sample_rate() != output_config.sample_rate() {
            tracing::warn!(
                input = input_config.sample_rate().0,
                output = output_config.sample_rate().0,
                "input and output sample rates differ; pitch readings will be scaled"
            );
        }
        if output_channels < VOICE_COUNT {
            tracing::info!(
                channels = output_channels,
                "fewer outputs than voices; mixing voices down"
            );
        }

        let config = self.config.sample_rate(sample_rate);
        let block_size = config.block_size;
        let harmonizer = Harmonizer::new(config).wrap_err("invalid harmonizer config")?;

        tracing::info!(
            input = %input_device.name().unwrap_or_default(),
            output = %output_device.name().unwrap_or_default(),
            sample_rate,
            input_channels,
            output_channels,
            "audio devices selected"
        );

        // --- Cross-thread rings ---
        let (input_tx, input_rx) = RingBuffer::<f32>::new(block_size * INPUT_RING_BLOCKS);
        let (control_tx, control_rx) = RingBuffer::<ControlMessage>::new(64);
        let (telemetry_tx, telemetry_rx) = RingBuffer::<Telemetry>::new(16);

        let input_stream = input_device
            .build_input_stream(
                &input_config.into(),
                {
                    let mut input_tx = input_tx;
                    move |data: &[f32], _| {
                        // First channel only; drop on overflow
                        for frame in data.chunks(input_channels) {
                            if input_tx.push(frame[0]).is_err() {
                                break;
                            }
                        }
                    }
                },
                |err| tracing::error!(%err, "input stream error"),
                None,
            )
            .wrap_err("failed to build input stream")?;

        let mut callback = AudioCallback {
            harmonizer,
            input_rx,
            control_rx,
            telemetry_tx,
            voices: VoiceBuffers::new(),
            input_block: vec![0.0; block_size],
            blocks_since_telemetry: 0,
        };

        let output_stream = output_device
            .build_output_stream(
                &output_config.into(),
                move |data: &mut [f32], _| callback.render(data, output_channels),
                |err| tracing::error!(%err, "output stream error"),
                None,
            )
            .wrap_err("failed to build output stream")?;

        input_stream.play().wrap_err("failed to start input stream")?;
        output_stream.play().wrap_err("failed to start output stream")?;
        tracing::info!("streams running");

        let mut terminal = ratatui::init();
        let mut ui = UiApp::new(telemetry_rx, control_tx, self.quantizer);
        let res = ui.run(&mut terminal);
        ratatui::restore();

        tracing::info!("shutting down");
        res
    }
}

impl Default for Brightwave {
    fn default() -> Self {
        Self::new()
    }
}

/// State owned by the output callback
struct AudioCallback {
    harmonizer: Harmonizer,
    input_rx: Consumer<f32>,
    control_rx: Consumer<ControlMessage>,
    telemetry_tx: Producer<Telemetry>,
    voices: VoiceBuffers,
    input_block: Vec<f32>,
    blocks_since_telemetry: usize,
}

impl AudioCallback {
    fn render(&mut self, data: &mut [f32], channels: usize) {
        let total_frames = data.len() / channels;
        let block_size = self.input_block.len();
        let mut frames_written = 0;

        self.harmonizer.drain_messages(&mut self.control_rx);

        while frames_written < total_frames {
            let frames = (total_frames - frames_written).min(block_size);

            // Pull input; an underrun reads as silence
            let input = &mut self.input_block[..frames];
            for sample in input.iter_mut() {
                *sample = self.input_rx.pop().unwrap_or(0.0);
            }

            let mut out = self.voices.channels(frames);
            self.harmonizer.process_block(input, &mut out);

            let out_off = frames_written * channels;
            for i in 0..frames {
                let frame = &mut data[out_off + i * channels..out_off + (i + 1) * channels];
                if channels >= VOICE_COUNT {
                    for (ch, slot) in frame.iter_mut().enumerate() {
                        *slot = if ch < VOICE_COUNT { out[ch][i] } else { 0.0 };
                    }
                } else {
                    let mixed = out.iter().map(|voice| voice[i]).sum::<f32>() / VOICE_COUNT as f32;
                    frame.fill(mixed);
                }
            }

            self.blocks_since_telemetry += 1;
            if self.blocks_since_telemetry >= TELEMETRY_INTERVAL_BLOCKS {
                // Non-blocking; the UI only wants the latest value anyway
                let _ = self.telemetry_tx.push(self.harmonizer.telemetry());
                self.blocks_since_telemetry = 0;
            }

            frames_written += frames;
        }
    }
}
