// File: crates/history-core/src/model.rs
// Summary: Snapshot, revision and sample types shared across the pipeline.

use chrono::{DateTime, Utc};

/// One historical state of the snapshot file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Revision {
    pub id: String,
    pub timestamp: DateTime<Utc>,
}

impl Revision {
    pub fn new(id: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self { id: id.into(), timestamp }
    }
}

/// One entry of a snapshot. `name` is empty when the recorded name was
/// missing or not text; `price` is `None` when it was not a non-negative integer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemRecord {
    pub name: String,
    pub price: Option<u64>,
}

impl ItemRecord {
    pub fn new(name: impl Into<String>, price: u64) -> Self {
        Self { name: name.into(), price: Some(price) }
    }
}

/// Parsed content of the snapshot file at one revision.
#[derive(Clone, Debug)]
pub struct Snapshot {
    pub revision: Revision,
    pub records: Vec<ItemRecord>,
}

/// A matched and scaled price observation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Sample {
    pub timestamp: DateTime<Utc>,
    pub price: u64,
}

impl Sample {
    pub const fn new(timestamp: DateTime<Utc>, price: u64) -> Self {
        Self { timestamp, price }
    }
}
