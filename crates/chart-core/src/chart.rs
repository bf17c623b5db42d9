// File: crates/chart-core/src/chart.rs
// Summary: Plot delegate: generic XY line chart with a true-time x axis, rendered headless
// to PNG through a CPU raster surface.

use std::path::Path;

use skia_safe as skia;
use tracing::info;

use crate::error::{RenderError, RenderResult};
use crate::font::FontMode;
use crate::format::format_tick_value;
use crate::grid::linspace;
use crate::raster::{encode_png, new_surface, write_png};
use crate::scale::{padded_range, LinearScale, ValueScale};
use crate::series::{draw_series, Series};
use crate::table::ChartTable;
use crate::text::TextShaper;
use crate::theme::{series_color, Theme};
use crate::types::{Insets, HEIGHT, WIDTH};
use crate::Axis;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Captions, tick labels and legend; off for pixel-stable output.
    pub draw_labels: bool,
    pub font: FontMode,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::dark(),
            draw_labels: true,
            font: FontMode::AsciiFallback,
        }
    }
}

pub struct Chart {
    pub title: String,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    /// Label for each vertical gridline, left to right; empty for numeric ticks.
    pub x_tick_labels: Vec<String>,
}

impl Default for Chart {
    fn default() -> Self {
        Self::new()
    }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            x_tick_labels: Vec::new(),
        }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// One line per column, x = seconds since the epoch, so unequal real-time
    /// gaps keep their proportions. Axes are fitted to the data.
    pub fn from_table(table: &ChartTable) -> Self {
        let xs: Vec<f64> = table.index.iter().map(|ts| ts.timestamp() as f64).collect();
        let mut chart = Chart::new();
        chart.title = table.title.clone();
        for (i, column) in table.columns.iter().enumerate() {
            chart.add_series(Series::from_options(column.label.as_str(), series_color(i), &xs, &column.values));
        }
        chart.autoscale_axes();
        chart.x_axis.label = table.x_label.clone();
        chart.y_axis.label = table.y_label.clone();

        if let (Some(first), Some(last)) = (table.index.first(), table.index.last()) {
            let span = *last - *first;
            chart.x_tick_labels = (0..X_GRID_LINES)
                .map(|i| {
                    let frac = i as f64 / (X_GRID_LINES - 1) as f64;
                    let offset = chrono::Duration::seconds((span.num_seconds() as f64 * frac).round() as i64);
                    (*first + offset).format(&table.date_format).to_string()
                })
                .collect();
        }
        chart
    }

    /// Fit x to the data extent and y to the padded value range.
    pub fn autoscale_axes(&mut self) {
        let xs = self.series.iter().flat_map(|s| s.data_xy.iter().map(|p| p.0));
        let (xmin, xmax) = xs.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), x| (lo.min(x), hi.max(x)));
        if xmin.is_finite() && xmax.is_finite() {
            self.x_axis.min = xmin;
            self.x_axis.max = xmax;
        }
        self.x_axis.ensure_span();

        let yr = self.series.iter().filter_map(Series::y_range).reduce(|a, b| (a.0.min(b.0), a.1.max(b.1)));
        if let Some((lo, hi)) = yr {
            let (lo, hi) = padded_range(lo, hi);
            self.y_axis.min = lo;
            self.y_axis.max = hi;
        }
    }

    fn has_points(&self) -> bool {
        self.series.iter().any(|s| s.points().next().is_some())
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> RenderResult<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        write_png(output_png_path.as_ref(), &bytes)?;
        info!(path = %output_png_path.as_ref().display(), "wrote plot");
        Ok(())
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> RenderResult<Vec<u8>> {
        if !self.has_points() {
            return Err(RenderError::NoRenderableData);
        }
        let mut surface = new_surface(opts.width, opts.height)?;
        let canvas = surface.canvas();
        canvas.clear(opts.theme.background);

        let l = opts.insets.left as f32;
        let t = opts.insets.top as f32;
        let r = (opts.width - opts.insets.right as i32) as f32;
        let b = (opts.height - opts.insets.bottom as i32) as f32;
        let sx = LinearScale::new(l, r, self.x_axis.min, self.x_axis.max);
        let sy = ValueScale::new_linear(t, b, self.y_axis.min, self.y_axis.max);

        draw_grid(canvas, &opts.theme, l, t, r, b);
        draw_axes(canvas, &opts.theme, l, t, r, b);
        for s in &self.series {
            draw_series(canvas, s, |x, y| (sx.to_px(x), sy.to_px(y)), 2.0, 0.0);
        }
        if opts.draw_labels {
            self.draw_labels(canvas, opts, l, t, r, b)?;
        }

        encode_png(&mut surface)
    }

    fn draw_labels(&self, canvas: &skia::Canvas, opts: &RenderOptions, l: f32, t: f32, r: f32, b: f32) -> RenderResult<()> {
        let text = TextShaper::new(&opts.font);
        let font = &opts.font;
        let theme = &opts.theme;

        for (v, y) in linspace(self.y_axis.min, self.y_axis.max, Y_GRID_LINES)
            .into_iter()
            .zip(linspace(b as f64, t as f64, Y_GRID_LINES))
        {
            let label = font.prepare(&format_tick_value(v)).into_owned();
            let (w, h) = text.measure(&label, 12.0);
            text.draw_top_left(canvas, &label, l - 8.0 - w, y as f32 - h / 2.0, 12.0, theme.tick_label);
        }
        for (label, x) in self.x_tick_labels.iter().zip(linspace(l as f64, r as f64, X_GRID_LINES)) {
            let label = font.prepare(label);
            let w = text.measure_width(&label, 12.0);
            text.draw_top_left(canvas, &label, x as f32 - w / 2.0, b + 8.0, 12.0, theme.tick_label);
        }

        let title = font.prepare(&self.title);
        text.draw_top_left(canvas, &title, l, 24.0, 22.0, theme.title);
        let x_label = font.prepare(&self.x_axis.label);
        let w = text.measure_width(&x_label, 14.0);
        text.draw_top_left(canvas, &x_label, (l + r) / 2.0 - w / 2.0, b + 36.0, 14.0, theme.legend_label);
        let y_label = font.prepare(&self.y_axis.label);
        text.draw_rotated(canvas, &y_label, (l - 64.0, (t + b) / 2.0), 90.0, 14.0, theme.legend_label)?;

        // Legend along the top edge of the plot.
        let mut x = l;
        let mut swatch = skia::Paint::default();
        for s in &self.series {
            swatch.set_color(s.color);
            canvas.draw_rect(skia::Rect::from_xywh(x, t - 22.0, 12.0, 12.0), &swatch);
            let label = font.prepare(&s.label);
            text.draw_top_left(canvas, &label, x + 16.0, t - 25.0, 13.0, theme.legend_label);
            x += 16.0 + text.measure_width(&label, 13.0) + 18.0;
        }
        Ok(())
    }
}

// ---- helpers ----------------------------------------------------------------

const X_GRID_LINES: usize = 10;
const Y_GRID_LINES: usize = 6;

fn draw_grid(canvas: &skia::Canvas, theme: &Theme, l: f32, t: f32, r: f32, b: f32) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    for x in linspace(l as f64, r as f64, X_GRID_LINES) {
        canvas.draw_line((x as f32, t), (x as f32, b), &paint);
    }
    for y in linspace(t as f64, b as f64, Y_GRID_LINES) {
        canvas.draw_line((l, y as f32), (r, y as f32), &paint);
    }
}

fn draw_axes(canvas: &skia::Canvas, theme: &Theme, l: f32, t: f32, r: f32, b: f32) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.frame);
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(1.5);

    canvas.draw_line((l, b), (r, b), &axis_paint);
    canvas.draw_line((l, t), (l, b), &axis_paint);
}
