//! Error types for the diff crate.
//!
//! The core algorithms are total over string inputs; the only failure
//! mode lives at the byte boundary, before the core is entered.

/// Errors that can occur at the diff engine's input boundary.
#[derive(Debug, thiserror::Error)]
pub enum DiffError {
    /// A byte input was not valid UTF-8 and cannot be diffed as text.
    #[error("{side} input is not valid UTF-8: {source}")]
    InvalidInput {
        /// Which input was rejected (`"old"` or `"new"`).
        side: &'static str,
        /// The underlying decode failure.
        #[source]
        source: std::str::Utf8Error,
    },
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;
