//! Data structures for dictionary matching.
//!
//! This module contains the dictionary trie and the matchers that walk it:
//! - [`dict_trie`]: arena trie with soft deletion and failure links
//! - [`text_matcher`]: minimum/maximum, forward/reverse matching and overlap resolution
//!
//! A built trie is immutable during matching and can be shared freely between
//! threads; [`SharedDictionary`] adds a lock for dictionaries that change while
//! being matched against.

pub mod dict_trie;
pub mod text_matcher;

// Re-export common data structures
pub use dict_trie::{DictTrie, DictTrieError, DictTrieResult, SharedDictionary};
pub use text_matcher::{Hit, Hits, MatchError, MatchResult, MatchStrategy, OverlapResolver, TextMatcher};
