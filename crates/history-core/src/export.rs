// File: crates/history-core/src/export.rs
// Summary: CSV export of an aggregated table (UTF-8 with BOM, empty cells for gaps).

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::aggregate::AggregatedTable;
use crate::error::Result;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Render one index cell the way the cadence labels its rows.
pub fn format_index(table: &AggregatedTable, row: usize) -> String {
    let ts = table.index[row];
    if table.cadence.is_calendar() {
        ts.format("%Y-%m-%d").to_string()
    } else {
        ts.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

/// Integral values keep one decimal (`150.0`) so columns read as floats.
fn format_value(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{v:.1}")
    } else {
        format!("{v}")
    }
}

/// Write `table` to `out`. Header is the cadence's index label followed by
/// the item names; the file starts with a UTF-8 byte-order mark so that
/// spreadsheet tools pick up the encoding of non-ASCII names.
pub fn write_csv(table: &AggregatedTable, out: &Path) -> Result<()> {
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(out)?;
    file.write_all(UTF8_BOM)?;

    let mut writer = csv::Writer::from_writer(file);
    let mut header = Vec::with_capacity(table.columns.len() + 1);
    header.push(table.cadence.index_label().to_string());
    header.extend(table.columns.iter().cloned());
    writer.write_record(&header)?;

    for row in 0..table.len() {
        let mut record = Vec::with_capacity(header.len());
        record.push(format_index(table, row));
        for column in &table.values {
            record.push(column[row].map(format_value).unwrap_or_default());
        }
        writer.write_record(&record)?;
    }
    writer.flush()?;

    info!(path = %out.display(), rows = table.len(), "wrote csv");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_keep_a_decimal() {
        assert_eq!(format_value(150.0), "150.0");
        assert_eq!(format_value(12.25), "12.25");
        assert_eq!(format_value(0.0), "0.0");
    }
}
