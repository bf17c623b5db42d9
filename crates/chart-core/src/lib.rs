// File: crates/chart-core/src/lib.rs
// Summary: Chart library entry point; raster price chart, plot delegate, fonts and text.

pub mod error;
pub mod types;
pub mod geometry;
pub mod grid;
pub mod scale;
pub mod theme;
pub mod format;
pub mod font;
pub mod text;
pub mod raster;
pub mod series;
pub mod axis;
pub mod table;
pub mod price_chart;
pub mod chart;

pub use error::{RenderError, RenderResult};
pub use chart::{Chart, RenderOptions};
pub use price_chart::{PriceChart, RasterOptions};
pub use table::{ChartColumn, ChartTable};
pub use series::Series;
pub use axis::Axis;
pub use theme::Theme;
pub use text::TextShaper;
pub use font::{FontMode, FontSource};
pub use format::{ascii_fallback, format_tick_value};
