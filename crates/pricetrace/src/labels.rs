// File: crates/pricetrace/src/labels.rs
// Summary: Chart captions and legend labels derived from the aggregated table.

use chart_core::{ChartColumn, ChartTable};
use history_core::{AggregatedTable, BundleMultipliers, Cadence};

/// Legend label: `name (x60)` for bundled items, the bare name otherwise.
pub fn display_label(item: &str, multiplier: u64) -> String {
    if multiplier > 1 {
        format!("{item} (x{multiplier})")
    } else {
        item.to_string()
    }
}

/// Caption language. Chinese needs a CJK-capable font; the ASCII fallback
/// path gets English.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Language {
    Chinese,
    English,
}

impl Language {
    pub fn for_font(capable_font: bool) -> Self {
        if capable_font { Language::Chinese } else { Language::English }
    }
}

fn title_suffix(cadence: Cadence, lang: Language) -> &'static str {
    match (lang, cadence) {
        (Language::Chinese, Cadence::Raw | Cadence::Fill) => "价格变化",
        (Language::Chinese, Cadence::Daily) => "日均价走势",
        (Language::Chinese, Cadence::Weekly) => "周均价走势",
        (Language::English, Cadence::Raw) => "price trends",
        (Language::English, Cadence::Fill) => "10-minute price trends",
        (Language::English, Cadence::Daily) => "daily average price",
        (Language::English, Cadence::Weekly) => "weekly average price",
    }
}

/// `a×60、b 日均价走势` in Chinese, `ax60, b daily average price` in
/// English, where a plain `x` stands in for the multiplication sign.
pub fn title(items: &[String], multipliers: &BundleMultipliers, cadence: Cadence, lang: Language) -> String {
    let (times, sep) = match lang {
        Language::Chinese => ('×', "、"),
        Language::English => ('x', ", "),
    };
    let parts: Vec<String> = items
        .iter()
        .map(|item| match multipliers.get(item) {
            m if m > 1 => format!("{item}{times}{m}"),
            _ => item.clone(),
        })
        .collect();
    format!("{} {}", parts.join(sep), title_suffix(cadence, lang))
}

/// `(x label, y label)`.
pub fn axis_labels(cadence: Cadence, lang: Language) -> (&'static str, &'static str) {
    match (lang, cadence) {
        (Language::Chinese, Cadence::Raw | Cadence::Fill) => ("时间", "价格"),
        (Language::Chinese, Cadence::Daily) => ("日期", "日均价"),
        (Language::Chinese, Cadence::Weekly) => ("周起始日（周一）", "周均价"),
        (Language::English, Cadence::Raw | Cadence::Fill) => ("Time", "Price"),
        (Language::English, Cadence::Daily) => ("Date", "Average Price"),
        (Language::English, Cadence::Weekly) => ("Week start (Mon)", "Average Price"),
    }
}

pub fn date_format(cadence: Cadence) -> &'static str {
    if cadence.is_calendar() { "%Y-%m-%d" } else { "%m-%d %H:%M" }
}

/// Renderer input for `table`, with legend labels and captions filled in.
pub fn chart_table(table: &AggregatedTable, multipliers: &BundleMultipliers, capable_font: bool) -> ChartTable {
    let columns = table
        .columns
        .iter()
        .zip(&table.values)
        .map(|(item, values)| ChartColumn::new(display_label(item, multipliers.get(item)), values.clone()))
        .collect();
    let lang = Language::for_font(capable_font);
    let (x_label, y_label) = axis_labels(table.cadence, lang);
    ChartTable::new(table.index.clone(), columns)
        .with_date_format(date_format(table.cadence))
        .with_captions(title(&table.columns, multipliers, table.cadence, lang), x_label, y_label)
}
