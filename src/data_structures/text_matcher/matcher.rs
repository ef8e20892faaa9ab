// Copyright (c) 2025 CJK Match Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Strategy dispatch.
//!
//! [`TextMatcher`] binds a [`DictTrie`] to one [`MatchStrategy`], validates the
//! requested range once and hands the scan to the matching scanner.

use std::iter::FusedIterator;

use super::error::{check_range, MatchResult};
use super::hit::{Hit, Hits};
use super::max::{append_subsuming, MaxForward, MaxReverse};
use super::min::{MinForward, MinReverse};
use super::strategy::{MatchStrategy, Span};
use crate::data_structures::dict_trie::DictTrie;

/// Options for configuring the text matcher behavior.
#[derive(Debug, Clone, Default)]
pub struct MatcherOptions {
    /// The strategy to run
    pub strategy: MatchStrategy,

    /// Whether to record characters no hit covers
    pub track_unmatched: bool,
}

impl MatcherOptions {
    /// Creates a new options object with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the strategy to run.
    pub fn strategy(mut self, strategy: MatchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets whether unmatched characters should be recorded.
    ///
    /// # Arguments
    ///
    /// * `value` - `true` to fill [`Hits::unmatched`], `false` otherwise.
    pub fn track_unmatched(mut self, value: bool) -> Self {
        self.track_unmatched = value;
        self
    }
}

/// Lazily evaluated scan of one range, yielding raw spans.
///
/// For [`MatchStrategy::MaxReverse`] the spans are candidates that still have
/// to pass [`append_subsuming`]; [`TextMatcher::find`] does that for you.
#[derive(Debug)]
pub enum Scan<'s, V> {
    /// Minimum forward scan
    MinForward(MinForward<'s, V>),
    /// Minimum reverse scan
    MinReverse(MinReverse<'s, V>),
    /// Maximum forward scan
    MaxForward(MaxForward<'s, V>),
    /// Maximum reverse candidates
    MaxReverse(MaxReverse<'s, V>),
}

impl<V> Iterator for Scan<'_, V> {
    type Item = Span;

    fn next(&mut self) -> Option<Span> {
        match self {
            Scan::MinForward(scan) => scan.next(),
            Scan::MinReverse(scan) => scan.next(),
            Scan::MaxForward(scan) => scan.next(),
            Scan::MaxReverse(scan) => scan.next(),
        }
    }
}

impl<V> FusedIterator for Scan<'_, V> {}

/// Dictionary matcher running one strategy over a shared trie.
#[derive(Debug)]
pub struct TextMatcher<'a, V> {
    trie: &'a DictTrie<V>,
    options: MatcherOptions,
}

impl<'a, V> TextMatcher<'a, V> {
    /// Creates a matcher with the given strategy.
    pub fn new(trie: &'a DictTrie<V>, strategy: MatchStrategy) -> Self {
        Self::with_options(trie, MatcherOptions::new().strategy(strategy))
    }

    /// Creates a matcher with explicit options.
    pub fn with_options(trie: &'a DictTrie<V>, options: MatcherOptions) -> Self {
        Self { trie, options }
    }

    /// Minimum-length matcher in the given direction.
    pub fn min(trie: &'a DictTrie<V>, reverse: bool) -> Self {
        Self::new(trie, MatchStrategy::min(reverse))
    }

    /// Maximum-length matcher in the given direction.
    pub fn max(trie: &'a DictTrie<V>, reverse: bool) -> Self {
        Self::new(trie, MatchStrategy::max(reverse))
    }

    /// The strategy this matcher runs.
    pub fn strategy(&self) -> MatchStrategy {
        self.options.strategy
    }

    /// The trie this matcher walks.
    pub fn trie(&self) -> &'a DictTrie<V> {
        self.trie
    }

    /// Starts a lazy scan of `text[start..start + len]`.
    ///
    /// # Returns
    ///
    /// * `Ok(Scan)` - Iterator over raw spans, empty for a zero-length range.
    /// * `Err(MatchError::Range)` - If the range does not fit in `text`.
    pub fn scan<'s>(&self, text: &'s [char], start: usize, len: usize) -> MatchResult<Scan<'s, V>>
    where
        'a: 's,
    {
        let end = check_range(text.len(), start, len)?;
        Ok(self.scan_range(text, start, end))
    }

    /// Starts a lazy scan of the whole buffer.
    pub fn scan_all<'s>(&self, text: &'s [char]) -> Scan<'s, V>
    where
        'a: 's,
    {
        self.scan_range(text, 0, text.len())
    }

    /// Runs the strategy over `text[start..start + len]` and collects the spans.
    ///
    /// Reverse-maximum candidates are de-duplicated here.
    pub fn find_spans(&self, text: &[char], start: usize, len: usize) -> MatchResult<Vec<Span>> {
        let end = check_range(text.len(), start, len)?;
        Ok(self.spans_in_range(text, start, end))
    }

    /// Scans `text[start..end]`; the range must already be checked.
    pub(super) fn scan_range<'s>(&self, text: &'s [char], start: usize, end: usize) -> Scan<'s, V>
    where
        'a: 's,
    {
        let trie = self.trie;
        match self.options.strategy {
            MatchStrategy::MinForward => Scan::MinForward(MinForward::new(trie, text, start, end)),
            MatchStrategy::MinReverse => Scan::MinReverse(MinReverse::new(trie, text, start, end)),
            MatchStrategy::MaxForward => Scan::MaxForward(MaxForward::new(trie, text, start, end)),
            MatchStrategy::MaxReverse => Scan::MaxReverse(MaxReverse::new(trie, text, start, end)),
        }
    }

    fn spans_in_range(&self, text: &[char], start: usize, end: usize) -> Vec<Span> {
        let scan = self.scan_range(text, start, end);
        match self.options.strategy {
            MatchStrategy::MaxReverse => scan.fold(Vec::new(), |mut spans, span| {
                append_subsuming(&mut spans, span);
                spans
            }),
            _ => scan.collect(),
        }
    }
}

impl<V: Clone> TextMatcher<'_, V> {
    /// Matches `text[start..start + len]`.
    ///
    /// # Arguments
    ///
    /// * `text` - The input buffer.
    /// * `start` - First position to match.
    /// * `len` - Number of characters to match.
    ///
    /// # Returns
    ///
    /// * `Ok(Hits)` - Hits in discovery order; empty for a zero-length range.
    /// * `Err(MatchError::Range)` - If the range does not fit in `text`.
    pub fn find(&self, text: &[char], start: usize, len: usize) -> MatchResult<Hits<V>> {
        let end = check_range(text.len(), start, len)?;
        Ok(self.collect_range(text, start, end))
    }

    /// Matches the whole buffer.
    pub fn find_all(&self, text: &[char]) -> Hits<V> {
        self.collect_range(text, 0, text.len())
    }

    /// Matches a string, positions are counted in characters.
    pub fn find_str(&self, text: &str) -> Hits<V> {
        let chars: Vec<char> = text.chars().collect();
        self.find_all(&chars)
    }

    /// Builds the hit for a span from the accepting node's own text and value.
    pub fn hit(&self, span: Span) -> Option<Hit<V>> {
        let text = self.trie.output(span.node)?;
        let value = self.trie.value(span.node)?;
        Some(Hit::new(span.end, text, value.clone()))
    }

    fn collect_range(&self, text: &[char], start: usize, end: usize) -> Hits<V> {
        let mut hits = self.new_hits();
        for span in self.spans_in_range(text, start, end) {
            if let Some(hit) = self.hit(span) {
                hits.add_hit(hit);
            }
        }
        hits.record_uncovered(text, start, end);

        tracing::debug!(
            strategy = %self.options.strategy,
            start,
            end,
            hits = hits.len(),
            "Text matched"
        );
        hits
    }

    fn new_hits(&self) -> Hits<V> {
        if self.options.track_unmatched {
            Hits::with_unmatched_tracking()
        } else {
            Hits::new()
        }
    }
}

impl<V> Clone for TextMatcher<'_, V> {
    fn clone(&self) -> Self {
        Self {
            trie: self.trie,
            options: self.options.clone(),
        }
    }
}
