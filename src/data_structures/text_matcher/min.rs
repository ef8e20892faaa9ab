// Copyright (c) 2025 CJK Match Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Minimum-length matching.
//!
//! Both scanners stop at the first accepting node on a live path, so every
//! emitted span is the shortest entry starting at its position.

use std::iter::FusedIterator;

use super::strategy::Span;
use crate::data_structures::dict_trie::{DictTrie, ROOT};

/// Left-to-right minimum matching over `[pos, end)`.
///
/// Cursor state lives in the iterator, so a caller can stop after any hit.
#[derive(Debug)]
pub struct MinForward<'s, V> {
    trie: &'s DictTrie<V>,
    text: &'s [char],
    pos: usize,
    end: usize,
}

impl<'s, V> MinForward<'s, V> {
    /// Creates a scanner over `text[start..end]`; the range must be valid.
    pub(crate) fn new(trie: &'s DictTrie<V>, text: &'s [char], start: usize, end: usize) -> Self {
        Self {
            trie,
            text,
            pos: start,
            end,
        }
    }
}

impl<V> Iterator for MinForward<'_, V> {
    type Item = Span;

    fn next(&mut self) -> Option<Span> {
        let mut current = ROOT;
        let mut match_start: Option<usize> = None;

        loop {
            // A walk still pending when the input runs out ends the scan
            if self.pos >= self.end {
                self.pos = self.end;
                return None;
            }

            match self.trie.lookup_child(current, self.text[self.pos]) {
                None => match match_start.take() {
                    Some(start) => {
                        tracing::trace!(start, dead_end = self.pos, "Min-forward rewind");
                        self.pos = start + 1;
                        current = ROOT;
                    }
                    None => self.pos += 1,
                },
                Some(node) => {
                    let start = *match_start.get_or_insert(self.pos);
                    self.pos += 1;
                    if self.trie.accepts(node) {
                        return Some(Span::new(start, self.pos, node));
                    }
                    current = node;
                }
            }
        }
    }
}

impl<V> FusedIterator for MinForward<'_, V> {}

/// Right-to-left minimum matching over `[start, end)`.
///
/// Candidate start positions are tried from the right. From each candidate the
/// trie is walked forward, bounded by the start of the previously emitted span,
/// and the first accepting node wins.
#[derive(Debug)]
pub struct MinReverse<'s, V> {
    trie: &'s DictTrie<V>,
    text: &'s [char],
    start: usize,
    /// One past the next candidate start position
    candidate: usize,
    /// Walks may not reach this position
    limit: usize,
}

impl<'s, V> MinReverse<'s, V> {
    /// Creates a scanner over `text[start..end]`; the range must be valid.
    pub(crate) fn new(trie: &'s DictTrie<V>, text: &'s [char], start: usize, end: usize) -> Self {
        Self {
            trie,
            text,
            start,
            candidate: end,
            limit: end,
        }
    }

    fn shortest_from(&self, from: usize) -> Option<Span> {
        let mut current = ROOT;
        let mut pos = from;
        while pos < self.limit {
            current = self.trie.lookup_child(current, self.text[pos])?;
            pos += 1;
            if self.trie.accepts(current) {
                return Some(Span::new(from, pos, current));
            }
        }
        None
    }
}

impl<V> Iterator for MinReverse<'_, V> {
    type Item = Span;

    fn next(&mut self) -> Option<Span> {
        while self.candidate > self.start {
            self.candidate -= 1;
            if let Some(span) = self.shortest_from(self.candidate) {
                self.limit = span.start;
                return Some(span);
            }
        }
        None
    }
}

impl<V> FusedIterator for MinReverse<'_, V> {}
