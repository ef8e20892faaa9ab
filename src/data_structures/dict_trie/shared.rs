// Copyright (c) 2025 CJK Match Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Thread-shared dictionary handle.

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard};

use super::{DictTrie, DictTrieResult};
use crate::data_structures::text_matcher::{
    Hits, MatchResult, MatchStrategy, MatcherOptions, OverlapResolver, TextMatcher,
};

/// A [`DictTrie`] behind a reader-writer lock.
///
/// Matching takes the read lock for the whole call, mutation takes the write
/// lock, so a match observes the dictionary either before or after a change,
/// never in between. Cloning the handle shares the same trie.
#[derive(Debug)]
pub struct SharedDictionary<V> {
    inner: Arc<RwLock<DictTrie<V>>>,
}

impl<V> SharedDictionary<V> {
    /// Wraps a trie for sharing between threads.
    pub fn new(trie: DictTrie<V>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(trie)),
        }
    }

    /// Read access to the underlying trie.
    pub fn read(&self) -> RwLockReadGuard<'_, DictTrie<V>> {
        self.inner.read()
    }

    /// Inserts or overwrites an entry under the write lock.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - If the entry was not live before.
    /// * `Ok(false)` - If an existing entry was overwritten.
    /// * `Err(DictTrieError)` - As for [`DictTrie::insert`].
    pub fn insert<P: AsRef<str>>(&self, pattern: P, value: V) -> DictTrieResult<bool> {
        self.inner.write().insert(pattern, value)
    }

    /// Soft-deletes an entry under the write lock.
    pub fn mark_deleted<P: AsRef<str>>(&self, pattern: P) -> bool {
        self.inner.write().mark_deleted(pattern)
    }

    /// Builds failure links under the write lock.
    pub fn build_failure_links(&self) -> DictTrieResult<()> {
        self.inner.write().build_failure_links()
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Whether no entry is live.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}

impl<V: Clone> SharedDictionary<V> {
    /// Matches `text[start..start + len]` with the given options.
    pub fn find(
        &self,
        options: MatcherOptions,
        text: &[char],
        start: usize,
        len: usize,
    ) -> MatchResult<Hits<V>> {
        let trie = self.inner.read();
        TextMatcher::with_options(&trie, options).find(text, start, len)
    }

    /// Matches a whole string with one strategy.
    pub fn find_str(&self, strategy: MatchStrategy, text: &str) -> Hits<V> {
        let trie = self.inner.read();
        TextMatcher::new(&trie, strategy).find_str(text)
    }

    /// Maximum forward matching with suffix entries resolved.
    ///
    /// # Returns
    ///
    /// * `Err(MatchError::FailureLinksMissing)` - If failure links were never built.
    pub fn find_overlapping(&self, text: &[char], start: usize, len: usize) -> MatchResult<Hits<V>> {
        let trie = self.inner.read();
        OverlapResolver::new(&trie)?.find(text, start, len)
    }
}

impl<V> Clone for SharedDictionary<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<V> From<DictTrie<V>> for SharedDictionary<V> {
    fn from(trie: DictTrie<V>) -> Self {
        Self::new(trie)
    }
}
