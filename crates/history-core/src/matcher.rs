// File: crates/history-core/src/matcher.rs
// Summary: Resolve a query name to a price within one snapshot.

use crate::model::ItemRecord;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MatchMode {
    /// Full string equality.
    #[default]
    Exact,
    /// Query is a substring of the name; first hit in list order wins.
    Fuzzy,
}

/// Price of the first record matching `query`, or `None` when nothing
/// matches (the common case) or the matching record carries no usable price.
pub fn pick_price(records: &[ItemRecord], query: &str, mode: MatchMode) -> Option<u64> {
    let hit = match mode {
        MatchMode::Exact => records.iter().find(|r| r.name == query),
        MatchMode::Fuzzy => records.iter().find(|r| r.name.contains(query)),
    };
    hit.and_then(|r| r.price)
}
