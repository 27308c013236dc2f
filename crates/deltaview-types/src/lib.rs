//! Data model for the Deltaview diff engine.
//!
//! This crate defines the renderer-agnostic types exchanged between the
//! diff engine and its consumers (a rendering layer, a history store).
//! It contains no diff logic; the engine lives in `deltaview-diff`.
//!
//! # Key Types
//!
//! - [`ChangeKind`] -- Added / Removed / Unchanged tag shared by every level
//! - [`LineChange`] -- one run of the line-level edit script
//! - [`CharChange`] -- one intra-line part of a character-level edit script
//! - [`DiffLineRecord`] -- one numbered output line with char annotations
//! - [`DiffStats`] -- aggregate added/removed/unchanged counts
//! - [`DiffOptions`] / [`Granularity`] -- engine configuration

pub mod change;
pub mod options;
pub mod record;

pub use change::{ChangeKind, CharChange, LineChange};
pub use options::{DiffOptions, Granularity};
pub use record::{DiffLineRecord, DiffStats};
