use crate::dsp::oscillator::OscillatorBlock;

/// One oscillator pinned to a fixed multiple of the fundamental.
pub struct HarmonicVoice {
    ratio: f32,
    osc: OscillatorBlock,
}

impl HarmonicVoice {
    pub fn new(ratio: f32, sample_rate: f32, amplitude: f32) -> Self {
        Self {
            ratio,
            osc: OscillatorBlock::sine(sample_rate, amplitude),
        }
    }

    /// Restart from phase zero at `fundamental * ratio`.
    pub fn start(&mut self, fundamental: f32) {
        self.osc.reset();
        self.osc.set_frequency(fundamental * self.ratio);
    }

    /// Follow a new fundamental; phase carries over.
    pub fn retune(&mut self, fundamental: f32) {
        self.osc.set_frequency(fundamental * self.ratio);
    }

    #[inline]
    pub fn next_sample(&mut self) -> f32 {
        self.osc.next_sample()
    }

    pub fn ratio(&self) -> f32 {
        self.ratio
    }

    pub fn frequency(&self) -> f32 {
        self.osc.frequency()
    }

    pub fn amplitude(&self) -> f32 {
        self.osc.amplitude()
    }

    pub fn phase(&self) -> f32 {
        self.osc.phase()
    }
}
