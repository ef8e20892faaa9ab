// Copyright (c) 2025 CJK Match Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Maximum-length matching.
//!
//! Both scanners keep walking through accepting nodes and only emit the longest
//! entry once the path dies or the input ends.

use std::iter::FusedIterator;

use super::strategy::Span;
use crate::data_structures::dict_trie::{DictTrie, ROOT};

/// Longest live entry of `trie` starting at `from` and ending at or before `limit`.
fn longest_from<V>(trie: &DictTrie<V>, text: &[char], from: usize, limit: usize) -> Option<Span> {
    let mut current = ROOT;
    let mut longest = None;
    for (pos, &c) in text.iter().enumerate().take(limit).skip(from) {
        match trie.lookup_child(current, c) {
            Some(node) => {
                if trie.accepts(node) {
                    longest = Some(Span::new(from, pos + 1, node));
                }
                current = node;
            }
            None => break,
        }
    }
    longest
}

/// Left-to-right maximum matching over `[pos, end)`.
///
/// After a hit the scan restarts at the root right after it. When no entry
/// starts at the current position, exactly one character is skipped.
#[derive(Debug)]
pub struct MaxForward<'s, V> {
    trie: &'s DictTrie<V>,
    text: &'s [char],
    pos: usize,
    end: usize,
}

impl<'s, V> MaxForward<'s, V> {
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

impl<V> Iterator for MaxForward<'_, V> {
    type Item = Span;

    fn next(&mut self) -> Option<Span> {
        while self.pos < self.end {
            match longest_from(self.trie, self.text, self.pos, self.end) {
                Some(span) => {
                    self.pos = span.end;
                    return Some(span);
                }
                None => self.pos += 1,
            }
        }
        None
    }
}

impl<V> FusedIterator for MaxForward<'_, V> {}

/// Right-to-left maximum matching candidates over `[start, end)`.
///
/// Candidate start positions are tried from the right and the longest entry from
/// each one is yielded. Candidates may overlap spans found earlier; feed them
/// through [`append_subsuming`] to get the de-duplicated result.
#[derive(Debug)]
pub struct MaxReverse<'s, V> {
    trie: &'s DictTrie<V>,
    text: &'s [char],
    start: usize,
    /// One past the next candidate start position
    candidate: usize,
    end: usize,
}

impl<'s, V> MaxReverse<'s, V> {
    /// Creates a scanner over `text[start..end]`; the range must be valid.
    pub(crate) fn new(trie: &'s DictTrie<V>, text: &'s [char], start: usize, end: usize) -> Self {
        Self {
            trie,
            text,
            start,
            candidate: end,
            end,
        }
    }
}

impl<V> Iterator for MaxReverse<'_, V> {
    type Item = Span;

    fn next(&mut self) -> Option<Span> {
        while self.candidate > self.start {
            self.candidate -= 1;
            if let Some(span) = longest_from(self.trie, self.text, self.candidate, self.end) {
                return Some(span);
            }
        }
        None
    }
}

impl<V> FusedIterator for MaxReverse<'_, V> {}

/// Appends a reverse-maximum candidate, dropping spans it makes redundant.
///
/// `spans` holds earlier candidates, each starting right of `span`. Walking back
/// from the most recent one:
/// * `span.end <= h.start`: no overlap, stop;
/// * `span.end < h.end`: `span` only partly covers `h`, discard `span`;
/// * otherwise `h` lies inside `span` and is removed; stop once `h.end == span.end`.
pub fn append_subsuming(spans: &mut Vec<Span>, span: Span) {
    let mut remove = 0;
    for existing in spans.iter().rev() {
        if span.end <= existing.start {
            break;
        } else if span.end < existing.end {
            tracing::trace!(
                start = span.start,
                end = span.end,
                "Reverse-max candidate discarded"
            );
            return;
        } else {
            remove += 1;
            if span.end == existing.end {
                break;
            }
        }
    }
    spans.truncate(spans.len() - remove);
    spans.push(span);
}
