// File: crates/chart-core/src/scale.rs
// Summary: X placement (index rank or linear time) and the inverted linear Y scale.

/// Places `n` index positions across `[left_px, right_px]` by rank.
/// A single position sits at the centre.
#[derive(Clone, Copy, Debug)]
pub struct RankScale {
    pub left_px: f32,
    pub right_px: f32,
    pub n: usize,
}

impl RankScale {
    pub fn new(left_px: f32, right_px: f32, n: usize) -> Self {
        Self { left_px, right_px, n }
    }

    #[inline]
    pub fn to_px(&self, rank: usize) -> f32 {
        if self.n <= 1 {
            return (self.left_px + self.right_px) / 2.0;
        }
        let step = (self.right_px - self.left_px) / (self.n - 1) as f32;
        self.left_px + rank as f32 * step
    }

    pub fn positions(&self) -> Vec<f32> {
        (0..self.n).map(|i| self.to_px(i)).collect()
    }
}

/// Linear map from a data interval onto `[left_px, right_px]`.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub left_px: f32,
    pub right_px: f32,
    pub min: f64,
    pub max: f64,
}

impl LinearScale {
    pub fn new(left_px: f32, right_px: f32, min: f64, max: f64) -> Self {
        Self { left_px, right_px, min, max }
    }

    #[inline]
    pub fn to_px(&self, x: f64) -> f32 {
        let span = (self.max - self.min).max(1e-9);
        self.left_px + ((x - self.min) / span) as f32 * (self.right_px - self.left_px)
    }
}

/// Vertical value scale mapping `[vmin, vmax]` to `[bottom_px, top_px]`.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub vmin: f64,
    pub vmax: f64,
}

impl ValueScale {
    pub fn new_linear(top_px: f32, bottom_px: f32, vmin: f64, mut vmax: f64) -> Self {
        if (vmax - vmin).abs() < 1e-12 {
            vmax = vmin + 1.0;
        }
        Self { top_px, bottom_px, vmin, vmax }
    }

    #[inline]
    pub fn to_px(&self, y: f64) -> f32 {
        let span = (self.vmax - self.vmin).max(1e-12);
        self.bottom_px - ((y - self.vmin) / span) as f32 * (self.bottom_px - self.top_px)
    }

    #[inline]
    pub fn from_px(&self, py: f32) -> f64 {
        let span = self.vmax - self.vmin;
        self.vmin + ((self.bottom_px - py) / (self.bottom_px - self.top_px)) as f64 * span
    }
}

/// Pad a data range for display: 5% of the span (at least 1.0) on each
/// side, or 5% of the magnitude (at least 1.0) when the range is flat.
pub fn padded_range(min: f64, max: f64) -> (f64, f64) {
    let flat = (max - min).abs() <= 1e-9 * min.abs().max(max.abs()).max(1.0);
    let pad = if flat { (min.abs() * 0.05).max(1.0) } else { ((max - min) * 0.05).max(1.0) };
    (min - pad, max + pad)
}
