use crate::{synth::voice::HarmonicVoice, VOICE_COUNT};

/*
Harmonic Oscillator Bank
========================

Four sine voices follow one fundamental at fixed just-intonation ratios:

  channel   ratio   interval above the fundamental
  -------   -----   ------------------------------
     0       1/1    unison
     1       3/2    perfect fifth
     2       4/3    perfect fourth
     3       2/1    octave

Each voice writes to its own output channel. The voices share nothing but
the fundamental: no common phase, no cross-modulation, and no normalization
across channels (each runs at the configured amplitude).

`start` initializes every voice from phase zero. `set_frequency` is the
tracking path and only moves the phase increments, so a pitch change bends
the running waveforms instead of restarting them (restarts would click).
*/

/// Frequency multipliers per output channel.
pub const HARMONIC_RATIOS: [f32; VOICE_COUNT] = [1.0, 3.0 / 2.0, 4.0 / 3.0, 2.0];

pub struct HarmonicOscillatorBank {
    fundamental: f32,
    voices: [HarmonicVoice; VOICE_COUNT],
}

impl HarmonicOscillatorBank {
    /// Build a silent bank (fundamental 0 Hz). Call [`start`](Self::start)
    /// to tune it.
    pub fn new(sample_rate: f32, amplitude: f32) -> Self {
        Self {
            fundamental: 0.0,
            voices: HARMONIC_RATIOS.map(|ratio| HarmonicVoice::new(ratio, sample_rate, amplitude)),
        }
    }

    /// Reset every voice to phase zero and tune to `frequency`.
    pub fn start(&mut self, frequency: f32) {
        self.fundamental = if frequency.is_finite() { frequency.max(0.0) } else { 0.0 };
        let frequency = self.fundamental;
        for voice in &mut self.voices {
            voice.start(frequency);
        }
    }

    /// Re-tune every voice without touching phase or amplitude.
    ///
    /// Non-finite input is ignored; negative input clamps to 0 Hz.
    pub fn set_frequency(&mut self, frequency: f32) {
        if !frequency.is_finite() {
            return;
        }
        let frequency = frequency.max(0.0);
        self.fundamental = frequency;
        for voice in &mut self.voices {
            voice.retune(frequency);
        }
    }

    /// Render one sample per voice per frame into the matching channel.
    ///
    /// The frame count is the shortest channel length.
    pub fn process(&mut self, out: &mut [&mut [f32]; VOICE_COUNT]) {
        let frames = out.iter().map(|channel| channel.len()).min().unwrap_or(0);

        for frame in 0..frames {
            for (channel, voice) in out.iter_mut().zip(self.voices.iter_mut()) {
                channel[frame] = voice.next_sample();
            }
        }
    }

    pub fn fundamental(&self) -> f32 {
        self.fundamental
    }

    pub fn frequencies(&self) -> [f32; VOICE_COUNT] {
        [
            self.voices[0].frequency(),
            self.voices[1].frequency(),
            self.voices[2].frequency(),
            self.voices[3].frequency(),
        ]
    }

    pub fn phases(&self) -> [f32; VOICE_COUNT] {
        [
            self.voices[0].phase(),
            self.voices[1].phase(),
            self.voices[2].phase(),
            self.voices[3].phase(),
        ]
    }

    pub fn voices(&self) -> &[HarmonicVoice; VOICE_COUNT] {
        &self.voices
    }
}
