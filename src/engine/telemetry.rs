use crate::SNAPSHOT_LEN;

/// Read-only view of the engine for display and logging (allocation-free, Copy).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Telemetry {
    /// Latest zero-crossing estimate in Hz
    pub zero_crossing_hz: f32,
    /// Latest spectral peak estimate in Hz
    pub spectral_hz: f32,
    /// Fundamental the bank is currently tuned to
    pub fundamental_hz: f32,
    /// Samples held by the analysis window
    pub buffer_fill: usize,
    pub buffer_capacity: usize,
    /// Whether the bank is ignoring detected pitch
    pub holding: bool,
    /// Ready snapshot, if any: (samples, captured length)
    pub snapshot: Option<([f32; SNAPSHOT_LEN], usize)>,
    /// Most recent input samples (oldest first), up to `SNAPSHOT_LEN`
    pub recent: [f32; SNAPSHOT_LEN],
    pub recent_len: usize,
}

impl Telemetry {
    pub fn is_full(&self) -> bool {
        self.buffer_fill == self.buffer_capacity
    }

    pub fn recent(&self) -> &[f32] {
        &self.recent[..self.recent_len]
    }
}
