//! Hunk normalization: decompose runs into individually numbered lines.
//!
//! Three run kinds drive three deterministic counter-advance rules:
//! an unchanged line advances both counters, an added line only the
//! new-side counter, a removed line only the old-side counter. No other
//! state exists.

use deltaview_types::{ChangeKind, LineChange};

/// One line of a run, with its positions assigned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct NormalizedLine {
    /// 1-based position in the old text, if present there.
    pub old_line_number: Option<usize>,
    /// 1-based position in the new text, if present there.
    pub new_line_number: Option<usize>,
    /// Kind inherited from the run.
    pub kind: ChangeKind,
    /// The raw line text.
    pub content: String,
}

/// Split each run into lines and assign monotonically increasing line
/// numbers on both sides.
///
/// Run values are `\n`-joined separator-free lines, so the split here
/// is exact; a run whose value is empty is a single blank line. The
/// artifact case (an empty input text) never produces a run at all.
pub(crate) fn normalize(runs: &[LineChange]) -> Vec<NormalizedLine> {
    let mut old_line = 0usize;
    let mut new_line = 0usize;
    let mut lines = Vec::new();

    for run in runs {
        for content in run.value.split('\n') {
            let (old_number, new_number) = match run.kind {
                ChangeKind::Unchanged => {
                    old_line += 1;
                    new_line += 1;
                    (Some(old_line), Some(new_line))
                }
                ChangeKind::Added => {
                    new_line += 1;
                    (None, Some(new_line))
                }
                ChangeKind::Removed => {
                    old_line += 1;
                    (Some(old_line), None)
                }
            };
            lines.push(NormalizedLine {
                old_line_number: old_number,
                new_line_number: new_number,
                kind: run.kind,
                content: content.to_string(),
            });
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unchanged_run_advances_both_counters() {
        let runs = vec![LineChange::new("a\nb\nc", ChangeKind::Unchanged)];
        let lines = normalize(&runs);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2].old_line_number, Some(3));
        assert_eq!(lines[2].new_line_number, Some(3));
        assert_eq!(lines[2].content, "c");
    }

    #[test]
    fn added_run_advances_only_new_counter() {
        let runs = vec![
            LineChange::new("a", ChangeKind::Unchanged),
            LineChange::new("x\ny", ChangeKind::Added),
        ];
        let lines = normalize(&runs);
        assert_eq!(lines[1].old_line_number, None);
        assert_eq!(lines[1].new_line_number, Some(2));
        assert_eq!(lines[2].new_line_number, Some(3));
    }

    #[test]
    fn removed_run_advances_only_old_counter() {
        let runs = vec![
            LineChange::new("a", ChangeKind::Unchanged),
            LineChange::new("gone", ChangeKind::Removed),
            LineChange::new("b", ChangeKind::Unchanged),
        ];
        let lines = normalize(&runs);
        assert_eq!(lines[1].old_line_number, Some(2));
        assert_eq!(lines[1].new_line_number, None);
        // The following unchanged line resumes both sequences.
        assert_eq!(lines[2].old_line_number, Some(3));
        assert_eq!(lines[2].new_line_number, Some(2));
    }

    #[test]
    fn empty_run_value_is_one_blank_line() {
        let runs = vec![LineChange::new("", ChangeKind::Removed)];
        let lines = normalize(&runs);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].content, "");
        assert_eq!(lines[0].old_line_number, Some(1));
    }

    #[test]
    fn no_runs_no_lines() {
        assert!(normalize(&[]).is_empty());
    }
}
