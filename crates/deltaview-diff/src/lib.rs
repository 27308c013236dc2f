//! Diff engine for Deltaview.
//!
//! Aligns two text blobs into line-level runs, decomposes the runs into
//! individually numbered lines, annotates paired lines with
//! character-level edit scripts, and aggregates statistics. The output
//! is an ordered, renderer-agnostic [`DiffLineRecord`] sequence plus
//! [`DiffStats`]; painting it is a consumer's job.
//!
//! All entry points are pure functions of their inputs. [`DiffCache`]
//! offers optional memoization keyed by `(old, new, options)`.
//!
//! # Key Types
//!
//! - [`line_diff`] -- line-level edit script as [`LineChange`] runs
//! - [`char_diff`] -- intra-line edit script as [`CharChange`] parts
//! - [`build_diff_records`] / [`diff_bytes`] -- the full record pipeline
//! - [`aggregate_stats`] -- added/removed/unchanged counts
//! - [`DiffOutcome`] / [`DiffCache`] -- combined result and memoization

pub mod char_diff;
pub mod error;
pub mod line_diff;
pub mod memo;
mod normalize;
pub mod records;
pub mod stats;

pub use char_diff::char_diff;
pub use error::{DiffError, DiffResult};
pub use line_diff::line_diff;
pub use memo::DiffCache;
pub use records::{build_diff_records, diff_bytes, DiffOutcome};
pub use stats::aggregate_stats;

// Re-exported so engine consumers need only this crate.
pub use deltaview_types::{
    ChangeKind, CharChange, DiffLineRecord, DiffOptions, DiffStats, Granularity, LineChange,
};
