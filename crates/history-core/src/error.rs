// File: crates/history-core/src/error.rs
// Summary: Error taxonomy for the history pipeline plus recoverable warnings.

use std::fmt;
use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

/// Failures that end a run, plus the per-revision `Parse` failure that the
/// series builder downgrades to a [`Warning`].
#[derive(Debug, Error)]
pub enum Error {
    #[error("history access failed: {0}")]
    HistoryAccess(String),

    #[error("snapshot at {revision} is not a valid record list: {reason}")]
    Parse { revision: String, reason: String },

    #[error("{} is not a git repository", .0.display())]
    NotARepository(PathBuf),

    #[error("no valid item names supplied")]
    NoItems,

    #[error("no revisions of {file} found in the requested window")]
    NoRevisions { file: String },

    /// Every target came up empty. `warnings` holds the revisions skipped on the way.
    #[error("no price data found for any requested item: {}", .items.join(", "))]
    AllItemsMissing { items: Vec<String>, warnings: Vec<Warning> },

    #[error("invalid window: until {until} is earlier than since {since}")]
    InvalidWindow { since: NaiveDate, until: NaiveDate },

    #[error("csv export failed: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// A failure scoped to one revision or one item. Collected during a scan and
/// surfaced once the scan is complete.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Warning {
    SkippedRevision { revision: String, reason: String },
    MissingItem(String),
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::SkippedRevision { revision, reason } => {
                let short: String = revision.chars().take(7).collect();
                write!(f, "revision {short} skipped: {reason}")
            }
            Warning::MissingItem(item) => {
                write!(f, "no price data for '{item}' in the requested window")
            }
        }
    }
}
