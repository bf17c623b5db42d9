// File: crates/chart-core/src/geometry.rs
// Summary: Integer rectangles for plot-area pixel math.

use crate::types::Insets;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Canvas of `width`×`height` shrunk by `insets`.
    pub const fn inset(width: i32, height: i32, insets: Insets) -> Self {
        Self::from_ltrb(
            insets.left as i32,
            insets.top as i32,
            width - insets.right as i32,
            height - insets.bottom as i32,
        )
    }

    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }

    pub fn center_x(&self) -> f32 { (self.left + self.right) as f32 / 2.0 }
    pub fn center_y(&self) -> f32 { (self.top + self.bottom) as f32 / 2.0 }
}
