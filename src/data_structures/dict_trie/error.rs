// Copyright (c) 2025 CJK Match Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the dictionary trie.

/// Errors that can occur while building or mutating a [`DictTrie`](super::DictTrie).
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DictTrieError {
    /// An empty pattern was supplied for insertion.
    #[error("Pattern cannot be empty")]
    InvalidPattern,

    /// The pattern is deeper than the trie allows.
    #[error("Pattern '{pattern}' exceeds maximum trie depth of {max_depth}")]
    PatternTooLong {
        /// The rejected pattern.
        pattern: String,
        /// The maximum allowed depth.
        max_depth: usize,
    },

    /// Failure links were already built, the node set is frozen.
    #[error("Failure links have already been built for this trie")]
    AlreadyBuilt,
}

/// Result type for dictionary trie operations
pub type DictTrieResult<T> = Result<T, DictTrieError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DictTrieError::InvalidPattern;
        assert_eq!(err.to_string(), "Pattern cannot be empty");

        let err = DictTrieError::PatternTooLong {
            pattern: "中华人民共和国".to_string(),
            max_depth: 4,
        };
        assert_eq!(
            err.to_string(),
            "Pattern '中华人民共和国' exceeds maximum trie depth of 4"
        );

        let err = DictTrieError::AlreadyBuilt;
        assert_eq!(
            err.to_string(),
            "Failure links have already been built for this trie"
        );
    }
}
