#[cfg(feature = "rtrb")]
use rtrb::Consumer;

/// Commands from a foreground context to the audio callback.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ControlMessage {
    /// Arm a raw snapshot of the next block.
    StartSnapshot,
    /// Release a ready snapshot.
    CompleteSnapshot,
    /// Clear zero-crossing history.
    ResetTracking,
    /// Re-tune the bank by hand (phase preserved).
    SetFrequency(f32),
    /// Stop or resume following the detected pitch.
    Hold(bool),
}

pub trait MessageReceiver {
    fn pop(&mut self) -> Option<ControlMessage>;
}

#[cfg(feature = "rtrb")]
impl MessageReceiver for Consumer<ControlMessage> {
    fn pop(&mut self) -> Option<ControlMessage> {
        Consumer::pop(self).ok()
    }
}
