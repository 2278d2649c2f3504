use std::cell::Cell;

/// Uniform source of values in `[0, 1)`
pub trait RandomSource {
    fn next_unit(&self) -> f64;
}

/// `Math.random()` from the browser
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserRandom;

impl RandomSource for BrowserRandom {
    fn next_unit(&self) -> f64 {
        js_sys::Math::random()
    }
}

/// Replays a fixed list of values, cycling when exhausted
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    values: Vec<f64>,
    cursor: Cell<usize>,
}

impl SequenceRandom {
    /// Values are clamped into `[0, 1)`; an empty list always yields 0
    pub fn new(values: Vec<f64>) -> Self {
        let values = values
            .into_iter()
            .map(|v| if v.is_finite() { v.clamp(0.0, 1.0 - f64::EPSILON) } else { 0.0 })
            .collect();
        Self { values, cursor: Cell::new(0) }
    }
}

impl RandomSource for SequenceRandom {
    fn next_unit(&self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let i = self.cursor.get();
        self.cursor.set((i + 1) % self.values.len());
        self.values[i]
    }
}
