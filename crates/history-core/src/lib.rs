// File: crates/history-core/src/lib.rs
// Summary: Library entry point; exports the snapshot-history pipeline (scan, read, match, scale, build, aggregate).

pub mod error;
pub mod model;
pub mod history;
pub mod scanner;
pub mod snapshot;
pub mod matcher;
pub mod bundle;
pub mod series;
pub mod window;
pub mod aggregate;
pub mod export;

pub use error::{Error, Result, Warning};
pub use model::{ItemRecord, Revision, Sample, Snapshot};
pub use history::{GitCli, HistorySource, DEFAULT_SNAPSHOT_FILE};
pub use scanner::scan_revisions;
pub use snapshot::{parse_snapshot, read_snapshot};
pub use matcher::{pick_price, MatchMode};
pub use bundle::{is_bundled, BundleMultipliers, DEFAULT_BUNDLE_SIZE};
pub use series::{normalize_targets, CollectOptions, CollectReport, PriceSeries, SeriesBuilder};
pub use window::DateWindow;
pub use aggregate::{aggregate, AggregatedTable, Cadence};
pub use export::write_csv;
