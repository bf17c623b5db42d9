// File: crates/chart-core/src/text.rs
// Summary: Paragraph-based text shaping and drawing, including off-screen rotated labels.

use std::cell::RefCell;
use std::collections::HashMap;

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextAlign, TextStyle, TypefaceFontProvider};

use crate::error::{RenderError, RenderResult};
use crate::font::FontMode;

/// Alias the resolved font is registered under.
const RESOLVED_FAMILY: &str = "pricetrace-resolved";
const SANS_FAMILIES: [&str; 6] = ["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"];

/// Shapes and draws text for one render. Measurements are cached per
/// `(text, size)` for the lifetime of the shaper.
pub struct TextShaper {
    fonts: FontCollection,
    families: Vec<String>,
    metrics: RefCell<HashMap<(String, u32), (f32, f32)>>,
}

impl TextShaper {
    pub fn new(mode: &FontMode) -> Self {
        let mut fc = FontCollection::new();
        let mut families = Vec::with_capacity(SANS_FAMILIES.len() + 1);
        if let Some(typeface) = mode.typeface() {
            let mut provider = TypefaceFontProvider::new();
            provider.register_typeface(typeface.clone(), Some(RESOLVED_FAMILY));
            let assets: skia::FontMgr = provider.into();
            fc.set_asset_font_manager(Some(assets));
            families.push(RESOLVED_FAMILY.to_string());
        }
        // System manager for everything the resolved font lacks.
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        families.extend(SANS_FAMILIES.iter().map(|f| f.to_string()));
        Self { fonts: fc, families, metrics: RefCell::new(HashMap::new()) }
    }

    fn make_style(&self, size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(self.families.as_slice());
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&self.make_style(size, color));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// `(width, height)` of `text` at `size`.
    pub fn measure(&self, text: &str, size: f32) -> (f32, f32) {
        let key = (text.to_string(), size.to_bits());
        if let Some(m) = self.metrics.borrow().get(&key) {
            return *m;
        }
        let p = self.layout(text, size, skia::Color::TRANSPARENT);
        let m = (p.longest_line(), p.height());
        self.metrics.borrow_mut().insert(key, m);
        m
    }

    pub fn measure_width(&self, text: &str, size: f32) -> f32 {
        self.measure(text, size).0
    }

    /// Draw with the text box's top-left corner at `(x, y)`.
    pub fn draw_top_left(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color) {
        let p = self.layout(text, size, color);
        p.paint(canvas, (x, y));
    }

    /// Draw `text` rotated counter-clockwise by `degrees`, centred on `center`.
    /// The text is rasterised off-screen first, then composited.
    pub fn draw_rotated(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        center: (f32, f32),
        degrees: f32,
        size: f32,
        color: skia::Color,
    ) -> RenderResult<()> {
        if text.is_empty() {
            return Ok(());
        }
        let (w, h) = self.measure(text, size);
        let (w, h) = ((w.ceil() as i32).max(1), (h.ceil() as i32).max(1));
        let mut layer = skia::surfaces::raster_n32_premul((w, h)).ok_or(RenderError::Surface { width: w, height: h })?;
        layer.canvas().clear(skia::Color::TRANSPARENT);
        self.layout(text, size, color).paint(layer.canvas(), (0.0, 0.0));
        let image = layer.image_snapshot();

        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        canvas.save();
        canvas.translate(center);
        canvas.rotate(-degrees, None);
        canvas.draw_image(&image, (-(w as f32) / 2.0, -(h as f32) / 2.0), Some(&paint));
        canvas.restore();
        Ok(())
    }
}
