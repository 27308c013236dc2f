//! Engine configuration.
//!
//! A single options value parameterizes the one consolidated engine;
//! there are no per-variant engine copies.

use serde::{Deserialize, Serialize};

/// Token granularity for intra-line diffs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// Compare character by character.
    #[default]
    Char,
    /// Compare word tokens (whitespace runs are tokens of their own, so
    /// reconstruction stays exact).
    Word,
}

/// Configuration for a diff computation.
///
/// `DiffOptions` is `Hash + Eq` so it can participate in a memoization
/// key alongside the two input texts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiffOptions {
    /// When set, whitespace-only differences do not affect line
    /// alignment. The literal text is still carried through unmodified.
    pub ignore_whitespace: bool,
    /// Granularity of intra-line char diffs.
    pub granularity: Granularity,
}

impl DiffOptions {
    /// Options with everything at its default: exact alignment,
    /// character granularity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable whitespace-tolerant alignment.
    pub fn ignore_whitespace(mut self, ignore: bool) -> Self {
        self.ignore_whitespace = ignore;
        self
    }

    /// Select the intra-line granularity.
    pub fn granularity(mut self, granularity: Granularity) -> Self {
        self.granularity = granularity;
        self
    }
}
