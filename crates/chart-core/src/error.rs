// File: crates/chart-core/src/error.rs
// Summary: Render failures surfaced by both chart paths.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    /// Empty index, or every cell is a gap.
    #[error("no renderable data: the table has no rows or only gaps")]
    NoRenderableData,

    #[error("failed to create a {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },

    #[error("PNG encoding failed")]
    Encode,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type RenderResult<T> = std::result::Result<T, RenderError>;
