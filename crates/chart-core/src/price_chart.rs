// File: crates/chart-core/src/price_chart.rs
// Summary: Fixed-layout raster price chart: framed plot, tick grid, gap-broken lines,
// rotated date labels, wrapping legend and captions.

use std::path::Path;

use skia_safe as skia;
use tracing::{debug, info};

use crate::error::{RenderError, RenderResult};
use crate::font::FontMode;
use crate::format::format_tick_value;
use crate::geometry::RectI32;
use crate::grid::{label_stride, linspace};
use crate::raster::{encode_png, new_surface, write_png};
use crate::scale::{padded_range, RankScale, ValueScale};
use crate::series::{draw_series, Series};
use crate::table::ChartTable;
use crate::text::TextShaper;
use crate::theme::{series_color, Theme};
use crate::types::{Insets, HEIGHT, WIDTH};

const TICK_FONT: f32 = 14.0;
const LEGEND_FONT: f32 = 16.0;
const AXIS_FONT: f32 = 20.0;
const TITLE_FONT: f32 = 28.0;

const TICK_LABEL_GAP: f32 = 14.0;
const X_TICK_LEN: f32 = 6.0;
const DATE_LABEL_OFFSET: f32 = 38.0;
const DATE_LABEL_ANGLE: f32 = 45.0;

const LEGEND_INSET: f32 = 12.0;
const LEGEND_ROW: f32 = 22.0;
const LEGEND_ROWS: usize = 7;
const LEGEND_COLUMN: f32 = 240.0;
const LEGEND_SWATCH: f32 = 16.0;

const TITLE_Y: f32 = 30.0;
const X_LABEL_FROM_BOTTOM: f32 = 70.0;
const Y_LABEL_OFFSET: f32 = 70.0;

pub struct RasterOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    /// Horizontal gridlines, evenly spaced over the padded value range.
    pub y_ticks: usize,
    /// Upper bound on rotated date labels; ticks are still drawn at every row.
    pub max_x_labels: usize,
    pub theme: Theme,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            y_ticks: 6,
            max_x_labels: 24,
            theme: Theme::light(),
        }
    }
}

/// Top-left corners of legend entries: 7 rows per column, columns 240 px apart.
pub fn legend_slots(n: usize, origin: (f32, f32)) -> Vec<(f32, f32)> {
    (0..n)
        .map(|i| {
            let col = (i / LEGEND_ROWS) as f32;
            let row = (i % LEGEND_ROWS) as f32;
            (origin.0 + col * LEGEND_COLUMN, origin.1 + row * LEGEND_ROW)
        })
        .collect()
}

pub struct PriceChart<'a> {
    table: &'a ChartTable,
    font: &'a FontMode,
}

impl<'a> PriceChart<'a> {
    pub fn new(table: &'a ChartTable, font: &'a FontMode) -> Self {
        Self { table, font }
    }

    /// Render to `path`. Returns `true` when a capable font drew the text,
    /// `false` when labels went through the ASCII fallback.
    pub fn render_to_png(&self, opts: &RasterOptions, path: impl AsRef<Path>) -> RenderResult<bool> {
        let bytes = self.render_to_png_bytes(opts)?;
        write_png(path.as_ref(), &bytes)?;
        info!(path = %path.as_ref().display(), capable_font = self.font.is_capable(), "wrote chart");
        Ok(self.font.is_capable())
    }

    pub fn render_to_png_bytes(&self, opts: &RasterOptions) -> RenderResult<Vec<u8>> {
        let (lo, hi) = self.table.value_range().ok_or(RenderError::NoRenderableData)?;
        if self.table.index.is_empty() {
            return Err(RenderError::NoRenderableData);
        }
        let (lo, hi) = padded_range(lo, hi);
        debug!(rows = self.table.index.len(), columns = self.table.columns.len(), lo, hi, "rendering raster chart");

        let mut surface = new_surface(opts.width, opts.height)?;
        self.draw(surface.canvas(), opts, lo, hi)?;
        encode_png(&mut surface)
    }

    fn draw(&self, canvas: &skia::Canvas, opts: &RasterOptions, lo: f64, hi: f64) -> RenderResult<()> {
        let theme = &opts.theme;
        let plot = RectI32::inset(opts.width, opts.height, opts.insets);
        let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);
        let text = TextShaper::new(self.font);
        let xs = RankScale::new(l, r, self.table.index.len()).positions();
        let ys = ValueScale::new_linear(t, b, lo, hi);

        canvas.clear(theme.background);

        let mut frame = skia::Paint::default();
        frame.set_anti_alias(true);
        frame.set_style(skia::paint::Style::Stroke);
        frame.set_stroke_width(2.0);
        frame.set_color(theme.frame);
        canvas.draw_rect(skia::Rect::from_ltrb(l, t, r, b), &frame);

        // Gridlines with value labels right-aligned against the frame.
        let mut grid = skia::Paint::default();
        grid.set_stroke_width(1.0);
        grid.set_color(theme.grid);
        for level in linspace(lo, hi, opts.y_ticks) {
            let y = ys.to_px(level);
            canvas.draw_line((l, y), (r, y), &grid);
            let label = self.font.prepare(&format_tick_value(level)).into_owned();
            let (w, h) = text.measure(&label, TICK_FONT);
            text.draw_top_left(canvas, &label, l - TICK_LABEL_GAP - w, y - h / 2.0, TICK_FONT, theme.tick_label);
        }

        let px: Vec<f64> = xs.iter().map(|&x| x as f64).collect();
        for (i, column) in self.table.columns.iter().enumerate() {
            let series = Series::from_options(column.label.as_str(), series_color(i), &px, &column.values);
            draw_series(canvas, &series, |x, y| (x as f32, ys.to_px(y)), 2.0, 3.0);
        }

        let mut tick = skia::Paint::default();
        tick.set_stroke_width(1.0);
        tick.set_color(theme.frame);
        let stride = label_stride(xs.len(), opts.max_x_labels);
        for (i, (x, label)) in xs.iter().zip(self.table.date_labels()).enumerate() {
            canvas.draw_line((*x, b), (*x, b + X_TICK_LEN), &tick);
            if i % stride == 0 {
                let label = self.font.prepare(&label).into_owned();
                text.draw_rotated(canvas, &label, (*x, b + DATE_LABEL_OFFSET), DATE_LABEL_ANGLE, TICK_FONT, theme.tick_label)?;
            }
        }

        let slots = legend_slots(self.table.columns.len(), (l + LEGEND_INSET, t + LEGEND_INSET));
        let mut swatch = skia::Paint::default();
        swatch.set_style(skia::paint::Style::Fill);
        for (i, (column, (lx, ly))) in self.table.columns.iter().zip(slots).enumerate() {
            swatch.set_color(series_color(i));
            canvas.draw_rect(skia::Rect::from_xywh(lx, ly, LEGEND_SWATCH, LEGEND_SWATCH), &swatch);
            let label = self.font.prepare(&column.label);
            text.draw_top_left(canvas, &label, lx + 22.0, ly + 2.0, LEGEND_FONT, theme.legend_label);
        }

        let title = self.font.prepare(&self.table.title);
        text.draw_top_left(canvas, &title, l, TITLE_Y, TITLE_FONT, theme.title);

        let x_label = self.font.prepare(&self.table.x_label);
        let x_label_w = text.measure_width(&x_label, AXIS_FONT);
        let x_label_y = opts.height as f32 - X_LABEL_FROM_BOTTOM;
        text.draw_top_left(canvas, &x_label, plot.center_x() - x_label_w / 2.0, x_label_y, AXIS_FONT, theme.title);

        let y_label = self.font.prepare(&self.table.y_label);
        text.draw_rotated(canvas, &y_label, (l - Y_LABEL_OFFSET, plot.center_y()), 90.0, AXIS_FONT, theme.title)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legend_wraps_after_seven_rows() {
        let slots = legend_slots(9, (102.0, 102.0));
        assert_eq!(slots[0], (102.0, 102.0));
        assert_eq!(slots[6], (102.0, 102.0 + 6.0 * 22.0));
        assert_eq!(slots[7], (342.0, 102.0));
        assert_eq!(slots[8], (342.0, 124.0));
    }

    #[test]
    fn defaults_match_layout() {
        let o = RasterOptions::default();
        assert_eq!((o.width, o.height), (1280, 640));
        assert_eq!(RectI32::inset(o.width, o.height, o.insets), RectI32::from_ltrb(90, 90, 1200, 520));
        assert_eq!(o.y_ticks, 6);
    }
}
