// File: crates/chart-core/src/series.rs
// Summary: Line series with gap-aware segmentation.
// Notes:
// - A gap is stored as a non-finite y (NaN). Segments never bridge a gap.

use skia_safe as skia;

#[derive(Clone, Debug)]
pub struct Series {
    pub label: String,
    pub color: skia::Color,
    /// `(x, y)` in data space; `y` is NaN at gaps.
    pub data_xy: Vec<(f64, f64)>,
}

impl Series {
    /// Build from optional values at the given x positions.
    pub fn from_options(label: impl Into<String>, color: skia::Color, xs: &[f64], values: &[Option<f64>]) -> Self {
        let data_xy = xs
            .iter()
            .zip(values)
            .map(|(&x, v)| (x, v.filter(|y| y.is_finite()).unwrap_or(f64::NAN)))
            .collect();
        Self { label: label.into(), color, data_xy }
    }

    /// Maximal runs of present points, in x order.
    pub fn segments(&self) -> impl Iterator<Item = &[(f64, f64)]> + '_ {
        self.data_xy.split(|&(_, y)| !y.is_finite()).filter(|run| !run.is_empty())
    }

    /// Present points (markers).
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.data_xy.iter().copied().filter(|&(_, y)| y.is_finite())
    }

    pub fn y_range(&self) -> Option<(f64, f64)> {
        self.points().fold(None, |acc, (_, y)| match acc {
            None => Some((y, y)),
            Some((lo, hi)) => Some((lo.min(y), hi.max(y))),
        })
    }
}

/// Stroke every segment with at least two points, then put a marker on
/// every present point when `marker_radius > 0`.
pub fn draw_series<F>(canvas: &skia::Canvas, series: &Series, to_px: F, line_width: f32, marker_radius: f32)
where
    F: Fn(f64, f64) -> (f32, f32),
{
    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(line_width);
    stroke.set_color(series.color);

    for run in series.segments().filter(|run| run.len() >= 2) {
        let mut path = skia::Path::new();
        let (x0, y0) = run[0];
        path.move_to(to_px(x0, y0));
        for &(x, y) in &run[1..] {
            path.line_to(to_px(x, y));
        }
        canvas.draw_path(&path, &stroke);
    }

    if marker_radius > 0.0 {
        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);
        fill.set_color(series.color);
        for (x, y) in series.points() {
            canvas.draw_circle(to_px(x, y), marker_radius, &fill);
        }
    }
}
