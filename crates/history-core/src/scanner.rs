// File: crates/history-core/src/scanner.rs
// Summary: Lists revisions of the snapshot file inside a window, oldest first.

use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::history::HistorySource;
use crate::model::Revision;
use crate::window::DateWindow;

/// Revisions that changed `file` within `window`, ascending by time.
///
/// History failures propagate. An empty list is returned as-is; deciding
/// whether that aborts the run is left to the caller.
pub fn scan_revisions<H: HistorySource + ?Sized>(
    source: &H,
    file: &Path,
    window: &DateWindow,
) -> Result<Vec<Revision>> {
    let mut revisions = source.list_revisions(file, window)?;
    revisions.retain(|r| window.contains(r.timestamp));
    // Stable: equal commit times keep history order.
    revisions.sort_by_key(|r| r.timestamp);
    info!(file = %file.display(), count = revisions.len(), "scanned snapshot history");
    Ok(revisions)
}
