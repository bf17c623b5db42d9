// File: crates/chart-core/src/theme.rs
// Summary: Chart colours and the cyclic series palette.

use skia_safe as skia;

/// Series colours, assigned by column position and cycled.
pub const PALETTE: [skia::Color; 13] = [
    skia::Color::new(0xFF33_66CC),
    skia::Color::new(0xFFDC_3912),
    skia::Color::new(0xFFFF_9900),
    skia::Color::new(0xFF10_9618),
    skia::Color::new(0xFF99_0099),
    skia::Color::new(0xFF00_99C6),
    skia::Color::new(0xFFDD_4477),
    skia::Color::new(0xFF66_AA00),
    skia::Color::new(0xFFB8_2E2E),
    skia::Color::new(0xFF31_6395),
    skia::Color::new(0xFF99_4499),
    skia::Color::new(0xFF22_AA99),
    skia::Color::new(0xFFAA_AA11),
];

pub fn series_color(index: usize) -> skia::Color {
    PALETTE[index % PALETTE.len()]
}

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub background: skia::Color,
    pub grid: skia::Color,
    pub frame: skia::Color,
    pub tick_label: skia::Color,
    pub legend_label: skia::Color,
    pub title: skia::Color,
}

impl Theme {
    /// White canvas used by the raster price chart.
    pub fn light() -> Self {
        Self {
            background: skia::Color::WHITE,
            grid: skia::Color::new(0xFFE6_E6E6),
            frame: skia::Color::new(0xFF44_4444),
            tick_label: skia::Color::new(0xFF33_3333),
            legend_label: skia::Color::new(0xFF1B_1B1B),
            title: skia::Color::new(0xFF11_1111),
        }
    }

    /// Near-black canvas used by the plot delegate.
    pub fn dark() -> Self {
        Self {
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            frame: skia::Color::from_argb(255, 180, 180, 190),
            tick_label: skia::Color::from_argb(255, 150, 150, 160),
            legend_label: skia::Color::from_argb(255, 210, 210, 220),
            title: skia::Color::from_argb(255, 235, 235, 245),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_cycles() {
        assert_eq!(series_color(0), skia::Color::from_rgb(0x33, 0x66, 0xCC));
        assert_eq!(series_color(13), series_color(0));
        assert_eq!(series_color(14), skia::Color::from_rgb(0xDC, 0x39, 0x12));
    }
}
