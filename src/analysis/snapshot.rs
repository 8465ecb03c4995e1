use crate::SNAPSHOT_LEN;

/// On-demand capture of raw input samples for inspection.
///
/// The sequence is arm → capture → ready → complete. Arming only raises a
/// flag; the next processed block is copied in by position (sample `i` of the
/// block lands in slot `i`), after which the capture is marked ready and stays
/// ready until completed. Arming again while a capture is pending is allowed
/// and simply re-raises the flag.
pub struct Snapshot {
    samples: [f32; SNAPSHOT_LEN],
    captured: usize,
    armed: bool,
    ready: bool,
}

impl Snapshot {
    pub fn new() -> Self {
        Self {
            samples: [0.0; SNAPSHOT_LEN],
            captured: 0,
            armed: false,
            ready: false,
        }
    }

    pub fn arm(&mut self) {
        self.armed = true;
    }

    /// Copy the block if armed. Samples past `SNAPSHOT_LEN` are ignored.
    pub fn capture(&mut self, block: &[f32]) {
        if !self.armed {
            return;
        }

        let count = block.len().min(SNAPSHOT_LEN);
        self.samples[..count].copy_from_slice(&block[..count]);
        self.captured = count;

        self.armed = false;
        self.ready = true;
    }

    /// Release a ready capture so a new one can be reported.
    pub fn complete(&mut self) {
        self.ready = false;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn samples(&self) -> &[f32; SNAPSHOT_LEN] {
        &self.samples
    }

    /// How many leading slots the last capture filled.
    pub fn captured_len(&self) -> usize {
        self.captured
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::new()
    }
}
