//! Output records: numbered diff lines and aggregate statistics.

use serde::{Deserialize, Serialize};

use crate::change::{ChangeKind, CharChange};

/// One line of diff output.
///
/// Line numbers are 1-based. `old_line_number` is present iff the line
/// exists on the old side (`Removed` or `Unchanged`); `new_line_number`
/// is present iff it exists on the new side (`Added` or `Unchanged`).
/// `char_diffs` is always populated: an added or removed line carries a
/// single wholesale part, an unchanged line carries either one unchanged
/// part or a full character-level edit script when its two sides differ
/// only in ways the line alignment tolerated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffLineRecord {
    /// Position in the old text, if the line exists there.
    pub old_line_number: Option<usize>,
    /// Position in the new text, if the line exists there.
    pub new_line_number: Option<usize>,
    /// Line-level classification.
    pub kind: ChangeKind,
    /// The line's text, without a trailing separator. For an unchanged
    /// line whose sides differ, this is the new-side text.
    pub content: String,
    /// Ordered intra-line parts covering `content`.
    pub char_diffs: Vec<CharChange>,
}

impl DiffLineRecord {
    /// Returns `true` if this line was added.
    pub fn is_added(&self) -> bool {
        self.kind.is_added()
    }

    /// Returns `true` if this line was removed.
    pub fn is_removed(&self) -> bool {
        self.kind.is_removed()
    }

    /// Returns `true` if this line is unchanged at line granularity.
    pub fn is_unchanged(&self) -> bool {
        self.kind.is_unchanged()
    }

    /// Returns `true` if an unchanged line carries a real intra-line
    /// edit script (its sides differed despite line-level alignment).
    pub fn has_char_edits(&self) -> bool {
        self.char_diffs.iter().any(|c| !c.kind.is_unchanged())
    }
}

/// Aggregate counts over a record sequence.
///
/// Derived from the records; never mutated independently.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffStats {
    /// Number of `Added` records.
    pub added: usize,
    /// Number of `Removed` records.
    pub removed: usize,
    /// Number of `Unchanged` records.
    pub unchanged: usize,
}

impl DiffStats {
    /// Total number of records counted.
    pub fn total(&self) -> usize {
        self.added + self.removed + self.unchanged
    }

    /// Returns `true` if nothing was added or removed.
    pub fn is_clean(&self) -> bool {
        self.added == 0 && self.removed == 0
    }
}
