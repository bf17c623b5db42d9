// File: crates/history-core/tests/export.rs
// Purpose: CSV export writes a BOM, the cadence header and empty cells for gaps.

use chrono::{TimeZone, Utc};
use history_core::{aggregate, write_csv, Cadence, DateWindow, PriceSeries, Sample};

#[test]
fn daily_csv_layout() {
    let t = |d: u32, h: u32| Utc.with_ymd_and_hms(2025, 9, d, h, 0, 0).unwrap();
    let series = vec![
        PriceSeries::from_samples("老式钢盔", vec![Sample::new(t(1, 9), 100), Sample::new(t(1, 18), 200), Sample::new(t(3, 9), 90)]),
        PriceSeries::from_samples("9x19mm FMJ", vec![Sample::new(t(3, 12), 600)]),
    ];
    let table = aggregate(&series, Cadence::Daily, &DateWindow::unbounded()).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("nested/prices.csv");
    write_csv(&table, &out).unwrap();

    let bytes = std::fs::read(&out).unwrap();
    assert!(bytes.starts_with(b"\xEF\xBB\xBF"));
    let text = String::from_utf8(bytes[3..].to_vec()).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            "date,老式钢盔,9x19mm FMJ",
            "2025-09-01,150.0,",
            "2025-09-02,,",
            "2025-09-03,90.0,600.0",
        ]
    );
}

#[test]
fn raw_csv_uses_full_timestamps() {
    let ts = Utc.with_ymd_and_hms(2025, 9, 1, 7, 5, 30).unwrap();
    let series = vec![PriceSeries::from_samples("a", vec![Sample::new(ts, 12)])];
    let table = aggregate(&series, Cadence::Raw, &DateWindow::unbounded()).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("raw.csv");
    write_csv(&table, &out).unwrap();
    let text = std::fs::read_to_string(&out).unwrap();
    assert!(text.contains("timestamp,a"));
    assert!(text.contains("2025-09-01 07:05:30,12.0"));
}
