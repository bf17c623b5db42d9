// File: crates/chart-core/src/types.rs
// Summary: Canvas dimensions and the margins that place the plot rectangle.

pub const WIDTH: i32 = 1280;
pub const HEIGHT: i32 = 640;

/// Pixels between each canvas edge and the plot frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Default for Insets {
    /// Left holds tick labels and the rotated y caption; bottom holds the
    /// rotated dates and the x caption; top holds the title.
    fn default() -> Self {
        Self { left: 90, right: 80, top: 90, bottom: 120 }
    }
}
