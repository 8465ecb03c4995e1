/// Source of gate readings (0.0 = low, anything greater = high).
pub trait GateInput {
    fn read(&mut self) -> f32;
}

impl<F> GateInput for F
where
    F: FnMut() -> f32,
{
    fn read(&mut self) -> f32 {
        self()
    }
}

/// Rising/falling edge detector over a polled gate.
///
/// Every call reads the gate once and overwrites the stored previous reading,
/// whichever direction it checks. The very first read only seeds the history
/// and never reports an edge. Calling both `rising_edge` and `falling_edge`
/// per poll therefore compares against the reading taken by the other call.
pub struct EdgeDetector<G: GateInput> {
    gate: G,
    last_value: Option<f32>,
}

impl<G: GateInput> EdgeDetector<G> {
    pub fn new(gate: G) -> Self {
        Self {
            gate,
            last_value: None,
        }
    }

    /// True when the gate reading went strictly up since the last call.
    pub fn rising_edge(&mut self) -> bool {
        let next = self.gate.read();
        match self.last_value.replace(next) {
            Some(last) => next > last,
            None => false,
        }
    }

    /// True when the gate reading went strictly down since the last call.
    pub fn falling_edge(&mut self) -> bool {
        let next = self.gate.read();
        match self.last_value.replace(next) {
            Some(last) => next < last,
            None => false,
        }
    }

    pub fn last_value(&self) -> Option<f32> {
        self.last_value
    }

    pub fn gate_mut(&mut self) -> &mut G {
        &mut self.gate
    }
}
