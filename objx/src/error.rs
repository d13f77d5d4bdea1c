//! Error types for selector resolution

use objx_value::Kind;
use thiserror::Error;

/// Conditions that abort a resolution
///
/// Missing keys and type mismatches along a string path are never errors; they
/// are absorbed by the walk. Everything here is a broken caller precondition,
/// surfaced as a panic by `Obj::get` and as a value by `Obj::try_get`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ObjxError {
    /// Selector value is neither a string nor an integer
    #[error("invalid selector kind: {kind} (expected a string path or an integer index)")]
    InvalidSelectorKind {
        /// Kind of the rejected selector value
        kind: Kind,
    },

    /// Array index past the end of the array
    #[error("index out of range: '{segment}' on an array of length {len}")]
    IndexOutOfRange {
        /// Requested index
        index: u64,
        /// Length of the array that was indexed
        len: usize,
        /// Segment (or `[index]` for integer selectors) that performed the access
        segment: String,
    },

    /// Integer selector applied to a value that is not an array
    #[error("integer selector {index} applied to {found}, expected an array")]
    NotASequence {
        /// Requested index
        index: u64,
        /// Kind of the value that was indexed
        found: Kind,
    },

    /// Bracketed digits that do not fit in a platform index
    #[error("array index in segment '{segment}' is not a valid integer")]
    InvalidIndex {
        /// Offending segment text
        segment: String,
    },

    /// Selector string longer than the configured limit
    #[error("selector too long: {length} bytes (max: {max_length})")]
    SelectorTooLong {
        /// Selector length in bytes
        length: usize,
        /// Configured maximum
        max_length: usize,
    },

    /// Selector with more segments than the configured limit
    #[error("selector has {count} segments (max: {max_segments})")]
    TooManySegments {
        /// Number of dot-separated segments
        count: usize,
        /// Configured maximum
        max_segments: usize,
    },

    /// Limits configuration outside the hard maximums
    #[error("configuration exceeds hard limits: {reason}")]
    LimitsExceedHardMaximums {
        /// Which limit was rejected and why
        reason: String,
    },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ObjxError>;
