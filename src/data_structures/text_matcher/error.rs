// Copyright (c) 2025 CJK Match Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the text matcher.

/// Error types for text matching operations
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MatchError {
    /// The requested range does not fit in the input buffer
    #[error("Range start {start} with length {len} is outside a buffer of {buffer_len} characters")]
    Range {
        /// Requested start position
        start: usize,
        /// Requested length
        len: usize,
        /// Length of the input buffer
        buffer_len: usize,
    },

    /// Overlap resolution needs a trie with failure links
    #[error("Overlap resolution requires a trie with failure links built")]
    FailureLinksMissing,

    /// Unknown strategy name
    #[error("Unknown match strategy: {0}")]
    UnknownStrategy(String),
}

/// Result type for text matching operations
pub type MatchResult<T> = std::result::Result<T, MatchError>;

/// Validates `[start, start + len)` against a buffer and returns the exclusive end.
pub(crate) fn check_range(buffer_len: usize, start: usize, len: usize) -> MatchResult<usize> {
    match start.checked_add(len) {
        Some(end) if start <= buffer_len && end <= buffer_len => Ok(end),
        _ => Err(MatchError::Range {
            start,
            len,
            buffer_len,
        }),
    }
}
