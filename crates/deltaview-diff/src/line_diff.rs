//! Line-level diff: align two texts into runs of equal, added, and
//! removed lines.
//!
//! Uses the `similar` crate (Myers diff algorithm) over line tokens.
//! Tokens carry no separator, so splitting a run's value on `\n`
//! recovers exactly the lines it covers.

use similar::{DiffTag, TextDiff};

use deltaview_types::{ChangeKind, DiffOptions, LineChange};

/// Split a text into its line elements.
///
/// Every `\n`-separated element is a line, including empty ones; a text
/// ending in `\n` therefore ends with a genuine empty line, which is
/// what makes `\n`-joining the elements reproduce the text exactly. The
/// empty text is the one special case: splitting it yields a single
/// empty element that represents no line at all (a split artifact), so
/// it has zero lines.
pub(crate) fn split_lines(text: &str) -> Vec<&str> {
    if text.is_empty() {
        Vec::new()
    } else {
        text.split('\n').collect()
    }
}

/// Compute the line-level edit script between two texts.
///
/// Returns ordered, maximal runs: joining the old-side runs' lines
/// (`Removed` + `Unchanged`) with `\n` reproduces `old`, and the
/// new-side runs (`Added` + `Unchanged`) reproduce `new`. Identical
/// inputs yield a single `Unchanged` run; an empty side yields a single
/// all-`Added` or all-`Removed` run; two empty inputs yield no runs.
///
/// With `ignore_whitespace`, alignment compares whitespace-trimmed
/// lines but the emitted values stay literal; an `Unchanged` run then
/// carries the new-side text, and any character-level difference is
/// surfaced later by the record builder.
pub fn line_diff(old: &str, new: &str, options: &DiffOptions) -> Vec<LineChange> {
    let old_lines = split_lines(old);
    let new_lines = split_lines(new);

    if options.ignore_whitespace {
        let old_keys: Vec<&str> = old_lines.iter().map(|l| l.trim()).collect();
        let new_keys: Vec<&str> = new_lines.iter().map(|l| l.trim()).collect();
        diff_tokens(&old_keys, &new_keys, &old_lines, &new_lines)
    } else {
        diff_tokens(&old_lines, &new_lines, &old_lines, &new_lines)
    }
}

/// Run the edit-script algorithm over `keys` and materialize runs from
/// the corresponding literal `lines`.
fn diff_tokens(
    old_keys: &[&str],
    new_keys: &[&str],
    old_lines: &[&str],
    new_lines: &[&str],
) -> Vec<LineChange> {
    let diff = TextDiff::from_slices(old_keys, new_keys);

    let mut runs: Vec<LineChange> = Vec::new();
    for op in diff.ops() {
        match op.tag() {
            DiffTag::Equal => {
                // The new side is carried; under whitespace-tolerant
                // alignment the two sides may differ in literal text.
                push_run(&mut runs, ChangeKind::Unchanged, &new_lines[op.new_range()]);
            }
            DiffTag::Delete => {
                push_run(&mut runs, ChangeKind::Removed, &old_lines[op.old_range()]);
            }
            DiffTag::Insert => {
                push_run(&mut runs, ChangeKind::Added, &new_lines[op.new_range()]);
            }
            DiffTag::Replace => {
                push_run(&mut runs, ChangeKind::Removed, &old_lines[op.old_range()]);
                push_run(&mut runs, ChangeKind::Added, &new_lines[op.new_range()]);
            }
        }
    }

    runs
}

/// Append a run, coalescing with the previous run when the kind repeats.
fn push_run(runs: &mut Vec<LineChange>, kind: ChangeKind, lines: &[&str]) {
    if lines.is_empty() {
        return;
    }
    let joined = lines.join("\n");
    match runs.last_mut() {
        Some(last) if last.kind == kind => {
            last.value.push('\n');
            last.value.push_str(&joined);
        }
        _ => runs.push(LineChange::new(joined, kind)),
    }
}
