//! Change kinds and the raw outputs of the two edit-script passes.
//!
//! Both the line-level and the character-level differ emit the same
//! three-way tag. Modeling the tag as one enum (rather than a pair of
//! booleans) makes contradictory states unrepresentable.

use serde::{Deserialize, Serialize};

/// The three edit operations a diff can report, at any granularity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    /// Present only in the new text.
    Added,
    /// Present only in the old text.
    Removed,
    /// Present in both texts.
    Unchanged,
}

impl ChangeKind {
    /// Returns `true` for [`ChangeKind::Added`].
    pub fn is_added(self) -> bool {
        self == ChangeKind::Added
    }

    /// Returns `true` for [`ChangeKind::Removed`].
    pub fn is_removed(self) -> bool {
        self == ChangeKind::Removed
    }

    /// Returns `true` for [`ChangeKind::Unchanged`].
    pub fn is_unchanged(self) -> bool {
        self == ChangeKind::Unchanged
    }
}

/// One run of the line-level edit script.
///
/// A run is a maximal contiguous span of one operation type. `value`
/// holds the run's lines joined with `\n`; the individual lines never
/// contain a separator themselves, so splitting `value` on `\n` recovers
/// exactly the lines the run covers. Joining each side's runs back with
/// `\n` (Removed + Unchanged for the old side, Added + Unchanged for the
/// new side) reconstructs that input text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineChange {
    /// The lines covered by this run, `\n`-joined.
    pub value: String,
    /// The operation this run performs.
    pub kind: ChangeKind,
}

impl LineChange {
    /// Create a run of the given kind.
    pub fn new(value: impl Into<String>, kind: ChangeKind) -> Self {
        Self {
            value: value.into(),
            kind,
        }
    }

    /// Number of lines this run covers.
    pub fn line_count(&self) -> usize {
        self.value.split('\n').count()
    }
}

/// One part of a character-level edit script for a single line pair.
///
/// Concatenating the non-`Removed` parts of a line's char diff yields
/// the new-side line; concatenating the non-`Added` parts yields the
/// old-side line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharChange {
    /// The substring covered by this part.
    pub value: String,
    /// The operation this part performs.
    pub kind: ChangeKind,
}

impl CharChange {
    /// An added part.
    pub fn added(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            kind: ChangeKind::Added,
        }
    }

    /// A removed part.
    pub fn removed(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            kind: ChangeKind::Removed,
        }
    }

    /// An unchanged part.
    pub fn unchanged(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            kind: ChangeKind::Unchanged,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_predicates() {
        assert!(ChangeKind::Added.is_added());
        assert!(ChangeKind::Removed.is_removed());
        assert!(ChangeKind::Unchanged.is_unchanged());
        assert!(!ChangeKind::Added.is_removed());
        assert!(!ChangeKind::Unchanged.is_added());
    }

    #[test]
    fn kind_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ChangeKind::Added).unwrap(),
            "\"added\""
        );
        assert_eq!(
            serde_json::to_string(&ChangeKind::Unchanged).unwrap(),
            "\"unchanged\""
        );
    }

    #[test]
    fn line_change_counts_lines() {
        assert_eq!(LineChange::new("a", ChangeKind::Unchanged).line_count(), 1);
        assert_eq!(LineChange::new("a\nb", ChangeKind::Added).line_count(), 2);
        // A run holding a single blank line.
        assert_eq!(LineChange::new("", ChangeKind::Removed).line_count(), 1);
    }

    #[test]
    fn char_change_constructors() {
        assert_eq!(CharChange::added("x").kind, ChangeKind::Added);
        assert_eq!(CharChange::removed("x").kind, ChangeKind::Removed);
        assert_eq!(CharChange::unchanged("x").kind, ChangeKind::Unchanged);
        assert_eq!(CharChange::added("abc").value, "abc");
    }
}
