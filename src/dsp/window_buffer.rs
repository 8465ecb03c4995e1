/*
Sliding Analysis Window
=======================

The window keeps the most recent `capacity` input samples so analysis code
(spectral estimate, telemetry) can look back further than one audio block.

Storage is a fixed ring allocated once at construction. `head` points at the
oldest retained sample and `len` counts how many slots are filled:

    capacity = 8, len = 8, head = 3

      index:  0  1  2  3  4  5  6  7
              f  g  h  a  b  c  d  e
                       ^head (oldest)

Appending one more sample `i` overwrites slot 3 and moves head to 4, so the
window now reads b c d e f g h i. Every append past capacity evicts exactly
one oldest sample per new sample, whatever size the append chunks are.

An append larger than the whole window can only keep its own last
`capacity` samples; the rest are skipped without being written.
*/

pub struct WindowBuffer {
    buffer: Vec<f32>,
    head: usize,
    len: usize,
}

impl WindowBuffer {
    /// Allocate a window holding at most `capacity` samples.
    ///
    /// A zero capacity is bumped to one; the engine rejects it earlier via
    /// config validation.
    pub fn new(capacity: usize) -> Self {
        Self {
            buffer: vec![0.0; capacity.max(1)],
            head: 0,
            len: 0,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Number of samples currently held (the fill count shown on telemetry).
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Append a block, evicting the oldest samples once the window is full.
    pub fn append(&mut self, samples: &[f32]) {
        let capacity = self.capacity();

        // Only the tail of an oversized append can survive.
        let samples = if samples.len() > capacity {
            &samples[samples.len() - capacity..]
        } else {
            samples
        };

        for &sample in samples {
            if self.len < capacity {
                let idx = (self.head + self.len) % capacity;
                self.buffer[idx] = sample;
                self.len += 1;
            } else {
                self.buffer[self.head] = sample;
                self.head = (self.head + 1) % capacity;
            }
        }
    }

    /// Sample `index` positions after the oldest one.
    pub fn get(&self, index: usize) -> Option<f32> {
        if index >= self.len {
            return None;
        }
        Some(self.buffer[(self.head + index) % self.capacity()])
    }

    /// Iterate from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = f32> + '_ {
        (0..self.len).map(move |i| self.buffer[(self.head + i) % self.capacity()])
    }

    /// Copy the most recent `dest.len()` samples (oldest first) into `dest`.
    ///
    /// Returns how many samples were copied, which is less than `dest.len()`
    /// while the window is still filling. Uncopied slots are left untouched.
    pub fn copy_latest(&self, dest: &mut [f32]) -> usize {
        let count = dest.len().min(self.len);
        let start = self.len - count;
        for (i, slot) in dest.iter_mut().take(count).enumerate() {
            *slot = self.buffer[(self.head + start + i) % self.capacity()];
        }
        count
    }

    pub fn clear(&mut self) {
        self.buffer.fill(0.0);
        self.head = 0;
        self.len = 0;
    }
}
