// File: crates/chart-core/src/axis.rs
// Summary: Axis label and data range for the plot delegate.

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max }
    }

    pub fn default_x() -> Self {
        Self::new("Time", 0.0, 1.0)
    }

    pub fn default_y() -> Self {
        Self::new("Price", 0.0, 100.0)
    }

    /// Widen a degenerate range so scales never divide by zero.
    pub fn ensure_span(&mut self) {
        if !(self.max - self.min).is_finite() || self.max - self.min <= 0.0 {
            self.min -= 0.5;
            self.max += 0.5;
        }
    }
}
