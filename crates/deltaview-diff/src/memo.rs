//! Memoization of diff computations.
//!
//! Recomputing from scratch on every input-change event is the normal
//! mode; the cache only short-circuits the common case of a host asking
//! for the same `(old, new, options)` triple again. Hits return the
//! identical prior result.

use std::collections::HashMap;
use std::sync::Arc;

use deltaview_types::DiffOptions;

use crate::records::DiffOutcome;

const DEFAULT_CAPACITY: usize = 64;

/// A bounded cache of diff outcomes keyed by `(old, new, options)`.
///
/// Purely an optimization: results are immutable and shared via `Arc`,
/// so a hit and a fresh computation are observably identical. When the
/// cache reaches capacity it is reset rather than evicted entry by
/// entry; a diff-viewer host rarely revisits more than a handful of
/// distinct inputs.
#[derive(Debug)]
pub struct DiffCache {
    entries: HashMap<(String, String, DiffOptions), Arc<DiffOutcome>>,
    capacity: usize,
}

impl Default for DiffCache {
    fn default() -> Self {
        Self::new()
    }
}

impl DiffCache {
    /// A cache with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// A cache holding at most `capacity` outcomes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            capacity: capacity.max(1),
        }
    }

    /// Diff two texts, reusing a previously computed outcome when the
    /// exact same triple was seen before.
    pub fn diff(&mut self, old: &str, new: &str, options: &DiffOptions) -> Arc<DiffOutcome> {
        let key = (old.to_string(), new.to_string(), *options);
        if let Some(hit) = self.entries.get(&key) {
            return Arc::clone(hit);
        }

        let outcome = Arc::new(DiffOutcome::compute(old, new, options));
        if self.entries.len() >= self.capacity {
            self.entries.clear();
        }
        self.entries.insert(key, Arc::clone(&outcome));
        outcome
    }

    /// Number of cached outcomes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all cached outcomes.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
