// File: crates/history-core/src/aggregate.rs
// Summary: Resample per-item series onto a shared cadence and reindex onto the date window.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Utc};
use tracing::debug;

use crate::error::Result;
use crate::series::PriceSeries;
use crate::window::{end_of_day, midnight, DateWindow};

/// Grid spacing of [`Cadence::Fill`], in minutes.
pub const FILL_STEP_MINUTES: i64 = 10;
/// Longest run of grid steps bridged by forward fill (6 × 10 min = 1 hour).
pub const FILL_LIMIT: usize = 6;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cadence {
    /// Outer join on every observed timestamp.
    Raw,
    /// 10-minute grid, nearest sample per step, short gaps forward-filled.
    Fill,
    /// Mean per UTC calendar day.
    #[default]
    Daily,
    /// Mean per ISO week, labelled by its Monday.
    Weekly,
}

impl Cadence {
    pub const ALL: [Cadence; 4] = [Cadence::Raw, Cadence::Fill, Cadence::Daily, Cadence::Weekly];

    pub const fn name(self) -> &'static str {
        match self {
            Cadence::Raw => "raw",
            Cadence::Fill => "fill",
            Cadence::Daily => "daily",
            Cadence::Weekly => "weekly",
        }
    }

    /// Header of the index column in exports.
    pub const fn index_label(self) -> &'static str {
        match self {
            Cadence::Raw | Cadence::Fill => "timestamp",
            Cadence::Daily => "date",
            Cadence::Weekly => "week_start",
        }
    }

    /// `true` for cadences whose index is whole days.
    pub const fn is_calendar(self) -> bool {
        matches!(self, Cadence::Daily | Cadence::Weekly)
    }
}

impl fmt::Display for Cadence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Cadence {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Cadence::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown cadence '{s}' (expected raw, fill, daily or weekly)"))
    }
}

/// Time index × item table. `values[column][row]`; `None` is a gap, never zero.
#[derive(Clone, Debug, PartialEq)]
pub struct AggregatedTable {
    pub cadence: Cadence,
    pub index: Vec<DateTime<Utc>>,
    pub columns: Vec<String>,
    pub values: Vec<Vec<Option<f64>>>,
}

impl AggregatedTable {
    pub fn empty(cadence: Cadence) -> Self {
        Self { cadence, index: Vec::new(), columns: Vec::new(), values: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn column(&self, item: &str) -> Option<&[Option<f64>]> {
        let pos = self.columns.iter().position(|c| c == item)?;
        Some(&self.values[pos])
    }

    /// `true` when at least one cell holds a value.
    pub fn has_values(&self) -> bool {
        self.values.iter().flatten().any(Option::is_some)
    }
}

/// Resample `series` onto `cadence`, then reindex onto `window`.
///
/// The window is validated first; an inverted effective window fails with
/// `InvalidWindow` before any reindexing happens.
pub fn aggregate(series: &[PriceSeries], cadence: Cadence, window: &DateWindow) -> Result<AggregatedTable> {
    window.validate()?;
    let table = match cadence {
        Cadence::Raw => outer_join(series),
        Cadence::Fill => fill_grid(series),
        Cadence::Daily => bucket_means(series, Cadence::Daily, day_bucket, Duration::days(1)),
        Cadence::Weekly => bucket_means(series, Cadence::Weekly, week_bucket, Duration::weeks(1)),
    };
    debug!(%cadence, rows = table.len(), columns = table.columns.len(), "resampled");
    if table.is_empty() {
        return Ok(table);
    }
    reindex(table, window)
}

// ---- resampling -------------------------------------------------------------

/// Mean price per bucket key.
fn means_by<F>(s: &PriceSeries, key: F) -> BTreeMap<DateTime<Utc>, f64>
where
    F: Fn(DateTime<Utc>) -> DateTime<Utc>,
{
    let mut acc: BTreeMap<DateTime<Utc>, (f64, u32)> = BTreeMap::new();
    for sample in &s.samples {
        let slot = acc.entry(key(sample.timestamp)).or_insert((0.0, 0));
        slot.0 += sample.price as f64;
        slot.1 += 1;
    }
    acc.into_iter().map(|(k, (sum, n))| (k, sum / n as f64)).collect()
}

fn table_from_maps(cadence: Cadence, index: Vec<DateTime<Utc>>, series: &[PriceSeries], maps: &[BTreeMap<DateTime<Utc>, f64>]) -> AggregatedTable {
    let values = maps
        .iter()
        .map(|m| index.iter().map(|ts| m.get(ts).copied()).collect())
        .collect();
    AggregatedTable {
        cadence,
        index,
        columns: series.iter().map(|s| s.item.clone()).collect(),
        values,
    }
}

/// Union of all timestamps; repeated timestamps within one item are averaged.
fn outer_join(series: &[PriceSeries]) -> AggregatedTable {
    let maps: Vec<_> = series.iter().map(|s| means_by(s, |ts| ts)).collect();
    let index: BTreeSet<DateTime<Utc>> = maps.iter().flat_map(|m| m.keys().copied()).collect();
    table_from_maps(Cadence::Raw, index.into_iter().collect(), series, &maps)
}

fn day_bucket(ts: DateTime<Utc>) -> DateTime<Utc> {
    midnight(ts.date_naive())
}

fn monday_of(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

fn week_bucket(ts: DateTime<Utc>) -> DateTime<Utc> {
    midnight(monday_of(ts.date_naive()))
}

/// Contiguous bucket index from the earliest to the latest bucket; empty buckets are gaps.
fn bucket_means(series: &[PriceSeries], cadence: Cadence, key: fn(DateTime<Utc>) -> DateTime<Utc>, step: Duration) -> AggregatedTable {
    let maps: Vec<_> = series.iter().map(|s| means_by(s, key)).collect();
    let first = maps.iter().filter_map(|m| m.keys().next()).min().copied();
    let last = maps.iter().filter_map(|m| m.keys().next_back()).max().copied();
    let index = match (first, last) {
        (Some(first), Some(last)) => steps(first, last, step),
        _ => Vec::new(),
    };
    table_from_maps(cadence, index, series, &maps)
}

fn fill_step() -> Duration {
    Duration::minutes(FILL_STEP_MINUTES)
}

fn floor_to(ts: DateTime<Utc>, step_secs: i64) -> DateTime<Utc> {
    let secs = ts.timestamp().div_euclid(step_secs) * step_secs;
    Utc.timestamp_opt(secs, 0).single().unwrap_or(ts)
}

/// Grid aligned to UTC midnight, from the step holding the earliest sample to
/// the step holding the latest. Each step `g` owns `[g, g + step)` and takes
/// the sample of that interval nearest to `g`. Then short gaps are forward-filled.
fn fill_grid(series: &[PriceSeries]) -> AggregatedTable {
    let step = fill_step();
    let step_secs = step.num_seconds();
    let first = series.iter().filter_map(|s| s.samples.first()).map(|s| s.timestamp).min();
    let last = series.iter().filter_map(|s| s.samples.last()).map(|s| s.timestamp).max();
    let (Some(first), Some(last)) = (first, last) else {
        return AggregatedTable::empty(Cadence::Fill);
    };

    let origin = floor_to(first, step_secs);
    let index = steps(origin, floor_to(last, step_secs), step);
    let n = index.len();

    let values = series
        .iter()
        .map(|s| {
            let mut slots: Vec<Option<(i64, f64)>> = vec![None; n];
            for sample in &s.samples {
                let offset = (sample.timestamp - origin).num_seconds();
                let k = (offset.div_euclid(step_secs) as usize).min(n.saturating_sub(1));
                let dist = offset - k as i64 * step_secs;
                if let Some(slot) = slots.get_mut(k) {
                    if slot.map_or(true, |(best, _)| dist < best) {
                        *slot = Some((dist, sample.price as f64));
                    }
                }
            }
            forward_fill(slots.into_iter().map(|s| s.map(|(_, v)| v)).collect(), FILL_LIMIT)
        })
        .collect();

    AggregatedTable {
        cadence: Cadence::Fill,
        index,
        columns: series.iter().map(|s| s.item.clone()).collect(),
        values,
    }
}

/// Carry the last value into at most `limit` consecutive gaps after it.
pub fn forward_fill(mut values: Vec<Option<f64>>, limit: usize) -> Vec<Option<f64>> {
    let mut last = None;
    let mut run = 0usize;
    for v in values.iter_mut() {
        match *v {
            Some(x) => {
                last = Some(x);
                run = 0;
            }
            None => {
                if run < limit {
                    if let Some(x) = last {
                        *v = Some(x);
                        run += 1;
                    }
                }
            }
        }
    }
    values
}

fn steps(start: DateTime<Utc>, end: DateTime<Utc>, step: Duration) -> Vec<DateTime<Utc>> {
    let mut out = Vec::new();
    let mut t = start;
    while t <= end {
        out.push(t);
        t += step;
    }
    out
}

// ---- reindexing -------------------------------------------------------------

fn reindex(table: AggregatedTable, window: &DateWindow) -> Result<AggregatedTable> {
    let (first, last) = match (table.index.first(), table.index.last()) {
        (Some(f), Some(l)) => (*f, *l),
        _ => return Ok(table),
    };
    let (since, until) = window.resolve(first.date_naive(), last.date_naive())?;

    let index = match table.cadence {
        Cadence::Raw => {
            let (start, end) = (midnight(since), end_of_day(until));
            table.index.iter().copied().filter(|ts| *ts >= start && *ts < end).collect()
        }
        Cadence::Fill => {
            let start = if window.since.is_some() { midnight(since) } else { first };
            let end = if window.until.is_some() { end_of_day(until) - fill_step() } else { last };
            steps(start, end, fill_step())
        }
        Cadence::Daily => steps(midnight(since), midnight(until), Duration::days(1)),
        Cadence::Weekly => steps(midnight(monday_of(since)), midnight(monday_of(until)), Duration::weeks(1)),
    };

    let rows: HashMap<DateTime<Utc>, usize> = table.index.iter().enumerate().map(|(i, ts)| (*ts, i)).collect();
    let values = table
        .values
        .iter()
        .map(|col| index.iter().map(|ts| rows.get(ts).and_then(|&r| col[r])).collect())
        .collect();

    debug!(since = %since, until = %until, rows = index.len(), "reindexed onto window");
    Ok(AggregatedTable { cadence: table.cadence, index, columns: table.columns, values })
}
