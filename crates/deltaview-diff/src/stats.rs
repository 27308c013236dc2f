//! Statistics aggregation over a record sequence.

use deltaview_types::{ChangeKind, DiffLineRecord, DiffStats};

/// Count added, removed, and unchanged records in one pass.
pub fn aggregate_stats(records: &[DiffLineRecord]) -> DiffStats {
    let mut stats = DiffStats::default();
    for record in records {
        match record.kind {
            ChangeKind::Added => stats.added += 1,
            ChangeKind::Removed => stats.removed += 1,
            ChangeKind::Unchanged => stats.unchanged += 1,
        }
    }
    stats
}
