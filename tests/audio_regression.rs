use std::f32::consts::TAU;

use brightwave::{
    io::VoiceBuffers, synth::HARMONIC_RATIOS, ControlMessage, Harmonizer, HarmonizerConfig,
    TrackingSource, VOICE_COUNT,
};

const SAMPLE_RATE: f32 = 48_000.0;
const BLOCK: usize = 48;

fn sine(frequency: f32, len: usize) -> Vec<f32> {
    (0..len)
        .map(|n| (TAU * frequency * n as f32 / SAMPLE_RATE).sin())
        .collect()
}

/// Run `input` through the engine and collect every output channel.
fn render(harmonizer: &mut Harmonizer, input: &[f32]) -> [Vec<f32>; VOICE_COUNT] {
    let mut voices = VoiceBuffers::new();
    let mut rendered: [Vec<f32>; VOICE_COUNT] = Default::default();

    for block in input.chunks(BLOCK) {
        let mut out = voices.channels(block.len());
        harmonizer.process_block(block, &mut out);
        for (collected, channel) in rendered.iter_mut().zip(out.iter()) {
            collected.extend_from_slice(channel);
        }
    }
    rendered
}

/// Count upward zero crossings, a rough pitch measure for rendered output.
fn rising_crossings(signal: &[f32]) -> usize {
    signal
        .windows(2)
        .filter(|pair| pair[0] <= 0.0 && pair[1] > 0.0)
        .count()
}

#[test]
fn outputs_stay_within_amplitude() {
    let mut harmonizer = Harmonizer::new(HarmonizerConfig::default()).unwrap();
    let channels = render(&mut harmonizer, &sine(150.0, 4_800));

    for channel in &channels {
        assert!(channel.iter().any(|s| s.abs() > 0.0));
        assert!(channel.iter().all(|s| s.abs() <= 0.7 + 1e-6));
    }
}

#[test]
fn voices_sound_at_harmonic_ratios_of_the_tracked_pitch() {
    let mut harmonizer = Harmonizer::new(HarmonizerConfig::default()).unwrap();

    // Settle on the input first, then measure one second of output.
    render(&mut harmonizer, &sine(150.0, 4_800));
    let fundamental = harmonizer.bank().fundamental();
    assert!((fundamental - 300.0).abs() < 3.0, "got {fundamental}");

    let channels = render(&mut harmonizer, &sine(150.0, 48_000));
    for (channel, ratio) in channels.iter().zip(HARMONIC_RATIOS) {
        let cycles = rising_crossings(channel) as f32;
        let expected = fundamental * ratio;
        assert!(
            (cycles - expected).abs() < expected * 0.02 + 2.0,
            "ratio {ratio}: expected ~{expected} cycles, got {cycles}"
        );
    }
}

#[test]
fn pitch_change_is_followed_without_clicks() {
    let mut harmonizer = Harmonizer::new(HarmonizerConfig::default()).unwrap();
    let mut input = sine(100.0, 4_800);
    input.extend(sine(150.0, 4_800));

    let channels = render(&mut harmonizer, &input);
    assert!((harmonizer.bank().fundamental() - 300.0).abs() < 3.0);

    // Largest legal step between samples: the octave voice of the initial
    // 440 Hz tuning at full amplitude. A phase reset would jump much further.
    let max_step = 0.7 * TAU * 880.0 / SAMPLE_RATE * 1.01;
    for channel in &channels {
        for pair in channel.windows(2) {
            assert!((pair[1] - pair[0]).abs() <= max_step);
        }
    }
}

#[test]
fn spectral_tracking_drives_the_bank() {
    let config = HarmonizerConfig::new()
        .fft_size(1024)
        .spectral_interval(8)
        .tracking(TrackingSource::Spectral);
    let mut harmonizer = Harmonizer::new(config).unwrap();

    // 375 Hz is bin 8 of a 1024-point transform at 48 kHz.
    render(&mut harmonizer, &sine(375.0, 4_800));

    let telemetry = harmonizer.telemetry();
    assert_eq!(telemetry.spectral_hz, 375.0);
    assert_eq!(telemetry.fundamental_hz, 375.0);
    assert!((telemetry.zero_crossing_hz - 750.0).abs() < 10.0);
}

#[test]
fn buffer_fills_and_stays_full() {
    let mut harmonizer = Harmonizer::new(HarmonizerConfig::default()).unwrap();
    let signal = sine(220.0, 8_192);
    render(&mut harmonizer, &signal);

    let telemetry = harmonizer.telemetry();
    assert!(telemetry.is_full());
    assert_eq!(telemetry.buffer_fill, 4096);
    assert_eq!(telemetry.recent(), &signal[signal.len() - 48..]);
    assert!(harmonizer
        .window()
        .iter()
        .eq(signal[signal.len() - 4096..].iter().copied()));
}

#[test]
fn snapshot_captures_the_next_block_only() {
    let mut harmonizer = Harmonizer::new(HarmonizerConfig::default()).unwrap();
    let signal = sine(220.0, BLOCK * 3);

    render(&mut harmonizer, &signal[..BLOCK]);
    harmonizer.handle(ControlMessage::StartSnapshot);
    render(&mut harmonizer, &signal[BLOCK..]);

    let (captured, len) = harmonizer.telemetry().snapshot.unwrap();
    assert_eq!(len, BLOCK);
    assert_eq!(&captured[..], &signal[BLOCK..BLOCK * 2]);
}
