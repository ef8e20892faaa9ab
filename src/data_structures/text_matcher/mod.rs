// Copyright (c) 2025 CJK Match Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Dictionary matching over a [`DictTrie`](crate::data_structures::dict_trie::DictTrie).
//!
//! This module finds dictionary entries in a character buffer using one of four
//! strategies, and optionally reports the shorter suffix entries hidden inside
//! longer matches.
//!
//! # Features
//!
//! - Minimum and maximum matching, each left-to-right or right-to-left
//! - Lazy scans that can be abandoned after any hit
//! - Positions counted in characters, so CJK input needs no byte arithmetic
//! - Optional recording of characters no entry covers
//! - Overlap resolution through failure links
//!
//! # Example
//!
//! ```
//! use cjk_match_lib::data_structures::dict_trie::DictTrie;
//! use cjk_match_lib::data_structures::text_matcher::{MatchStrategy, TextMatcher};
//!
//! let trie = DictTrie::from_entries(vec![("中国", "CN"), ("中国人", "CNP"), ("人", "P")]).unwrap();
//!
//! let longest = TextMatcher::new(&trie, MatchStrategy::MaxForward).find_str("中国人");
//! assert_eq!(longest.matched_text(), "中国人");
//!
//! let shortest = TextMatcher::new(&trie, MatchStrategy::MinForward).find_str("中国人");
//! assert_eq!(shortest.matched_text(), "中国人");
//! assert_eq!(shortest.len(), 2);
//! ```
//!
//! # Ordering
//!
//! Forward strategies return hits left to right. Reverse strategies return them
//! in the order they were discovered, right to left; call [`Hits::sort`] for
//! ascending positions.

mod error;
mod hit;
mod matcher;
mod max;
mod min;
mod overlap;
mod strategy;

#[cfg(test)]
mod tests;

// Re-exports
pub use error::{MatchError, MatchResult};
pub use hit::{Hit, Hits, MatchCharacter};
pub use matcher::{MatcherOptions, Scan, TextMatcher};
pub use max::{append_subsuming, MaxForward, MaxReverse};
pub use min::{MinForward, MinReverse};
pub use overlap::OverlapResolver;
pub use strategy::{MatchStrategy, Span};
