//! Character-level diff: intra-line edit script for one line pair.
//!
//! Independent of the line differ; works on any string pair. Used by
//! the record builder to annotate lines the line-level alignment kept
//! despite a literal difference, and degenerately to tag a whole line
//! that has no counterpart.

use similar::{ChangeTag, TextDiff};

use deltaview_types::{ChangeKind, CharChange, Granularity};

/// Compute the intra-line edit script between two strings.
///
/// Consecutive same-kind tokens are coalesced, so the result is a
/// minimal ordered sequence of parts. Concatenating the non-`Removed`
/// parts yields `new`; concatenating the non-`Added` parts yields
/// `old`. Wholesale cases are never split: an empty `old` produces a
/// single `Added` part, an empty `new` a single `Removed` part, and two
/// empty inputs produce no parts.
pub fn char_diff(old: &str, new: &str, granularity: Granularity) -> Vec<CharChange> {
    if old.is_empty() && new.is_empty() {
        return Vec::new();
    }
    if old == new {
        return vec![CharChange::unchanged(new)];
    }
    if old.is_empty() {
        return vec![CharChange::added(new)];
    }
    if new.is_empty() {
        return vec![CharChange::removed(old)];
    }

    let diff = match granularity {
        Granularity::Char => TextDiff::from_chars(old, new),
        Granularity::Word => TextDiff::from_words(old, new),
    };

    let mut parts: Vec<CharChange> = Vec::new();
    for change in diff.iter_all_changes() {
        let kind = match change.tag() {
            ChangeTag::Equal => ChangeKind::Unchanged,
            ChangeTag::Delete => ChangeKind::Removed,
            ChangeTag::Insert => ChangeKind::Added,
        };
        match parts.last_mut() {
            Some(last) if last.kind == kind => last.value.push_str(change.value()),
            _ => parts.push(CharChange {
                value: change.value().to_string(),
                kind,
            }),
        }
    }

    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reconstruct(parts: &[CharChange], skip: ChangeKind) -> String {
        parts
            .iter()
            .filter(|p| p.kind != skip)
            .map(|p| p.value.as_str())
            .collect()
    }

    #[test]
    fn identical_strings_single_unchanged_part() {
        let parts = char_diff("same", "same", Granularity::Char);
        assert_eq!(parts, vec![CharChange::unchanged("same")]);
    }

    #[test]
    fn wholesale_added() {
        let parts = char_diff("", "whole line", Granularity::Char);
        assert_eq!(parts, vec![CharChange::added("whole line")]);
    }

    #[test]
    fn wholesale_removed() {
        let parts = char_diff("whole line", "", Granularity::Char);
        assert_eq!(parts, vec![CharChange::removed("whole line")]);
    }

    #[test]
    fn both_empty_no_parts() {
        assert!(char_diff("", "", Granularity::Char).is_empty());
    }

    #[test]
    fn single_char_substitution() {
        let parts = char_diff("let x = 1;", "let x = 2;", Granularity::Char);
        assert_eq!(
            parts,
            vec![
                CharChange::unchanged("let x = "),
                CharChange::removed("1"),
                CharChange::added("2"),
                CharChange::unchanged(";"),
            ]
        );
    }

    #[test]
    fn consecutive_changes_coalesce() {
        let parts = char_diff("abcdef", "abXYef", Granularity::Char);
        let removed: Vec<&CharChange> =
            parts.iter().filter(|p| p.kind.is_removed()).collect();
        let added: Vec<&CharChange> = parts.iter().filter(|p| p.kind.is_added()).collect();
        assert_eq!(removed.len(), 1);
        assert_eq!(removed[0].value, "cd");
        assert_eq!(added.len(), 1);
        assert_eq!(added[0].value, "XY");
    }

    #[test]
    fn reconstruction_in_both_directions() {
        let old = "the quick brown fox";
        let new = "the slow brown cat";
        for granularity in [Granularity::Char, Granularity::Word] {
            let parts = char_diff(old, new, granularity);
            assert_eq!(reconstruct(&parts, ChangeKind::Removed), new);
            assert_eq!(reconstruct(&parts, ChangeKind::Added), old);
        }
    }

    #[test]
    fn word_granularity_keeps_whitespace_tokens() {
        let parts = char_diff("alpha beta", "alpha gamma", Granularity::Word);
        assert_eq!(reconstruct(&parts, ChangeKind::Removed), "alpha gamma");
        assert!(parts.iter().any(|p| p.kind.is_unchanged()));
    }

    #[test]
    fn multibyte_content() {
        let parts = char_diff("héllo", "hêllo", Granularity::Char);
        assert_eq!(reconstruct(&parts, ChangeKind::Removed), "hêllo");
        assert_eq!(reconstruct(&parts, ChangeKind::Added), "héllo");
    }
}
