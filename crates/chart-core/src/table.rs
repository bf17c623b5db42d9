// File: crates/chart-core/src/table.rs
// Summary: Renderer input: a time index with labelled value columns and chart captions.

use chrono::{DateTime, Utc};

/// One plotted line. `values` align with the table index; `None` is a gap.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartColumn {
    pub label: String,
    pub values: Vec<Option<f64>>,
}

impl ChartColumn {
    pub fn new(label: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        Self { label: label.into(), values }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartTable {
    pub index: Vec<DateTime<Utc>>,
    /// `strftime` pattern for x tick labels.
    pub date_format: String,
    pub columns: Vec<ChartColumn>,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
}

impl ChartTable {
    pub fn new(index: Vec<DateTime<Utc>>, columns: Vec<ChartColumn>) -> Self {
        Self {
            index,
            date_format: "%Y-%m-%d".to_string(),
            columns,
            title: String::new(),
            x_label: "Date".to_string(),
            y_label: "Price".to_string(),
        }
    }

    pub fn with_captions(mut self, title: impl Into<String>, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        self.title = title.into();
        self.x_label = x_label.into();
        self.y_label = y_label.into();
        self
    }

    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    fn present_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.columns.iter().flat_map(|c| c.values.iter().flatten().copied()).filter(|v| v.is_finite())
    }

    /// Non-empty index and at least one present value.
    pub fn has_data(&self) -> bool {
        !self.index.is_empty() && self.present_values().next().is_some()
    }

    /// Min and max over present values.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.present_values().fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
    }

    pub fn date_labels(&self) -> Vec<String> {
        self.index.iter().map(|ts| ts.format(&self.date_format).to_string()).collect()
    }
}
