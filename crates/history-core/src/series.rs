// File: crates/history-core/src/series.rs
// Summary: Walk revisions oldest-first and accumulate matched, scaled samples per target item.

use std::collections::HashSet;
use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::bundle::BundleMultipliers;
use crate::error::{Error, Result, Warning};
use crate::history::{HistorySource, DEFAULT_SNAPSHOT_FILE};
use crate::matcher::{pick_price, MatchMode};
use crate::model::Sample;
use crate::scanner::scan_revisions;
use crate::snapshot::read_snapshot;
use crate::window::DateWindow;

/// Trim names, drop empties and repeated names, keep first-seen order.
pub fn normalize_targets<I, S>(raw: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut targets: Vec<String> = Vec::new();
    for item in raw {
        let item = item.as_ref().trim();
        if !item.is_empty() && !targets.iter().any(|t| t == item) {
            targets.push(item.to_string());
        }
    }
    if targets.is_empty() {
        return Err(Error::NoItems);
    }
    Ok(targets)
}

/// Samples for one item. Contract: no duplicate `(timestamp, price)` pairs,
/// timestamps non-decreasing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PriceSeries {
    pub item: String,
    pub samples: Vec<Sample>,
}

impl PriceSeries {
    /// Build from raw samples: drop exact duplicates (first kept), then stable-sort by time.
    pub fn from_samples(item: impl Into<String>, samples: Vec<Sample>) -> Self {
        let mut seen = HashSet::with_capacity(samples.len());
        let mut samples: Vec<Sample> = samples.into_iter().filter(|s| seen.insert(*s)).collect();
        samples.sort_by_key(|s| s.timestamp);
        Self { item: item.into(), samples }
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

#[derive(Clone, Debug)]
pub struct CollectOptions {
    /// Snapshot file path relative to the history root.
    pub file: PathBuf,
    pub window: DateWindow,
    pub mode: MatchMode,
}

impl Default for CollectOptions {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_SNAPSHOT_FILE),
            window: DateWindow::unbounded(),
            mode: MatchMode::Exact,
        }
    }
}

/// Result of a full scan.
#[derive(Clone, Debug)]
pub struct CollectReport {
    /// Items with at least one sample, in target order.
    pub series: Vec<PriceSeries>,
    /// Skipped revisions and missing items, in the order they were found.
    pub warnings: Vec<Warning>,
    pub revisions_scanned: usize,
}

impl CollectReport {
    pub fn missing(&self) -> Vec<&str> {
        self.warnings
            .iter()
            .filter_map(|w| match w {
                Warning::MissingItem(item) => Some(item.as_str()),
                _ => None,
            })
            .collect()
    }
}

pub struct SeriesBuilder<'a, H: HistorySource + ?Sized> {
    source: &'a H,
    multipliers: &'a BundleMultipliers,
    options: CollectOptions,
}

impl<'a, H: HistorySource + ?Sized> SeriesBuilder<'a, H> {
    pub fn new(source: &'a H, multipliers: &'a BundleMultipliers, options: CollectOptions) -> Self {
        Self { source, multipliers, options }
    }

    /// Scan the history and build one series per target.
    ///
    /// Fails with `NoRevisions` when the window holds no revision of the file
    /// and with `AllItemsMissing` when no target matched anywhere. Unreadable
    /// revisions and individually missing items become warnings.
    pub fn collect(&self, targets: &[String]) -> Result<CollectReport> {
        let file = &self.options.file;
        let revisions = scan_revisions(self.source, file, &self.options.window)?;
        if revisions.is_empty() {
            return Err(Error::NoRevisions { file: file.display().to_string() });
        }

        let mut warnings = Vec::new();
        let mut raw: Vec<Vec<Sample>> = vec![Vec::new(); targets.len()];

        for revision in &revisions {
            let snapshot = match read_snapshot(self.source, revision, file) {
                Ok(s) => s,
                Err(e) => {
                    let reason = match e {
                        Error::Parse { reason, .. } => format!("unparsable snapshot: {reason}"),
                        other => other.to_string(),
                    };
                    warn!(revision = %revision.id, %reason, "skipping revision");
                    warnings.push(Warning::SkippedRevision { revision: revision.id.clone(), reason });
                    continue;
                }
            };

            for (target, samples) in targets.iter().zip(raw.iter_mut()) {
                if let Some(price) = pick_price(&snapshot.records, target, self.options.mode) {
                    let scaled = self.multipliers.scale(target, price);
                    samples.push(Sample::new(revision.timestamp, scaled));
                }
            }
            debug!(revision = %revision.id, records = snapshot.records.len(), "read snapshot");
        }

        let mut series = Vec::new();
        let mut missing = Vec::new();
        for (target, samples) in targets.iter().zip(raw) {
            let s = PriceSeries::from_samples(target.clone(), samples);
            if s.is_empty() {
                missing.push(target.clone());
            } else {
                info!(item = %target, samples = s.samples.len(), "built series");
                series.push(s);
            }
        }

        if series.is_empty() {
            return Err(Error::AllItemsMissing { items: missing, warnings });
        }
        warnings.extend(missing.into_iter().map(Warning::MissingItem));

        Ok(CollectReport { series, warnings, revisions_scanned: revisions.len() })
    }
}
