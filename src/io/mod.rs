// Purpose - external interfaces: gate inputs and multi-channel audio blocks

pub mod gate;

pub use gate::{EdgeDetector, GateInput};

use crate::{MAX_BLOCK_SIZE, VOICE_COUNT};

/// Preallocated per-voice output buffers for the audio callback.
#[derive(Debug)]
pub struct VoiceBuffers {
    pub buffers: [Vec<f32>; VOICE_COUNT],
}

impl VoiceBuffers {
    pub fn new() -> Self {
        Self {
            buffers: std::array::from_fn(|_| vec![0.0; MAX_BLOCK_SIZE]),
        }
    }

    /// Borrow the first `frames` samples of every channel.
    pub fn channels(&mut self, frames: usize) -> [&mut [f32]; VOICE_COUNT] {
        let frames = frames.min(MAX_BLOCK_SIZE);
        self.buffers.each_mut().map(|buffer| &mut buffer[..frames])
    }
}

impl Default for VoiceBuffers {
    fn default() -> Self {
        Self::new()
    }
}
