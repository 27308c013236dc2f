//! Record building: the full pipeline from two texts to numbered,
//! char-annotated diff records.

use tracing::debug;

use deltaview_types::{
    ChangeKind, CharChange, DiffLineRecord, DiffOptions, DiffStats,
};

use crate::char_diff::char_diff;
use crate::error::{DiffError, DiffResult};
use crate::line_diff::{line_diff, split_lines};
use crate::normalize::normalize;
use crate::stats::aggregate_stats;

/// Compute the ordered diff record sequence for two texts.
///
/// Each record is one output line. Added and removed lines carry a
/// single wholesale char part; no cross-pairing is attempted for them.
/// A line the line-level alignment kept is `Unchanged` even when its
/// two sides differ in literal text (whitespace-tolerant alignment);
/// such a line carries the character-level edit script between its old
/// and new side, with the new side as `content`.
pub fn build_diff_records(old: &str, new: &str, options: &DiffOptions) -> Vec<DiffLineRecord> {
    let old_lines = split_lines(old);
    let new_lines = split_lines(new);
    let runs = line_diff(old, new, options);
    let normalized = normalize(&runs);

    let mut records = Vec::with_capacity(normalized.len());
    for line in normalized {
        let record = match line.kind {
            ChangeKind::Added => DiffLineRecord {
                old_line_number: None,
                new_line_number: line.new_line_number,
                kind: ChangeKind::Added,
                char_diffs: vec![CharChange::added(line.content.as_str())],
                content: line.content,
            },
            ChangeKind::Removed => DiffLineRecord {
                old_line_number: line.old_line_number,
                new_line_number: None,
                kind: ChangeKind::Removed,
                char_diffs: vec![CharChange::removed(line.content.as_str())],
                content: line.content,
            },
            ChangeKind::Unchanged => {
                let old_lookup = line
                    .old_line_number
                    .and_then(|n| old_lines.get(n - 1))
                    .copied();
                let new_lookup = line
                    .new_line_number
                    .and_then(|n| new_lines.get(n - 1))
                    .copied();
                debug_assert!(
                    old_lookup.is_some() && new_lookup.is_some(),
                    "unchanged line numbering out of bounds: old={:?} new={:?}",
                    line.old_line_number,
                    line.new_line_number,
                );
                let old_text = old_lookup.unwrap_or("");
                let new_text = new_lookup.unwrap_or("");

                let char_diffs = if old_text == new_text {
                    vec![CharChange::unchanged(new_text)]
                } else {
                    char_diff(old_text, new_text, options.granularity)
                };

                DiffLineRecord {
                    old_line_number: line.old_line_number,
                    new_line_number: line.new_line_number,
                    kind: ChangeKind::Unchanged,
                    content: new_text.to_string(),
                    char_diffs,
                }
            }
        };
        records.push(record);
    }

    debug!(records = records.len(), "built diff records");
    records
}

/// Combined result of one diff computation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiffOutcome {
    /// The ordered record sequence.
    pub records: Vec<DiffLineRecord>,
    /// Counts derived from `records`.
    pub stats: DiffStats,
}

impl DiffOutcome {
    /// Build records and statistics in one call.
    pub fn compute(old: &str, new: &str, options: &DiffOptions) -> Self {
        let records = build_diff_records(old, new, options);
        let stats = aggregate_stats(&records);
        Self { records, stats }
    }
}

/// Diff two byte buffers.
///
/// The boundary counterpart of [`build_diff_records`]: input that is
/// not valid UTF-8 is rejected with [`DiffError::InvalidInput`] before
/// it reaches the core, which only ever sees well-formed strings.
pub fn diff_bytes(old: &[u8], new: &[u8], options: &DiffOptions) -> DiffResult<DiffOutcome> {
    let old_str = std::str::from_utf8(old).map_err(|e| DiffError::InvalidInput {
        side: "old",
        source: e,
    })?;
    let new_str = std::str::from_utf8(new).map_err(|e| DiffError::InvalidInput {
        side: "new",
        source: e,
    })?;
    Ok(DiffOutcome::compute(old_str, new_str, options))
}
