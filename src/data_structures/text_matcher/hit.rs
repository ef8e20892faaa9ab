// Copyright (c) 2025 CJK Match Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Match result model.
//!
//! A [`Hit`] is one dictionary entry found in the input, [`Hits`] collects them
//! in discovery order together with optional records of characters no entry
//! covered.

use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

/// A matched span `[start, end)` of the input with its dictionary value.
#[derive(Debug, Clone, Serialize)]
pub struct Hit<V> {
    start: usize,
    end: usize,
    text: String,
    value: V,
}

impl<V> Hit<V> {
    /// Creates a hit ending at `end`; the start is derived from the text length.
    ///
    /// # Arguments
    ///
    /// * `end` - Exclusive end position in the input, in characters.
    /// * `text` - The matched entry text, at most `end` characters long.
    /// * `value` - The entry value.
    ///
    /// # Panics
    ///
    /// In debug builds, if `text` has more than `end` characters.
    pub fn new<S: Into<String>>(end: usize, text: S, value: V) -> Self {
        let text = text.into();
        let chars = text.chars().count();
        debug_assert!(
            chars <= end,
            "hit text {text:?} is longer than its end position {end}"
        );
        let start = end.saturating_sub(chars);
        Self {
            start,
            end,
            text,
            value,
        }
    }

    /// Inclusive start position in characters.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Exclusive end position in characters.
    pub fn end(&self) -> usize {
        self.end
    }

    /// Number of characters covered.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// A hit always covers at least one character, kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The matched entry text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The entry value.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Consumes the hit and returns its value.
    pub fn into_value(self) -> V {
        self.value
    }

    /// Returns `true` if `other` lies within this hit and is not identical to it.
    pub fn strictly_contains<U>(&self, other: &Hit<U>) -> bool {
        self.start <= other.start
            && other.end <= self.end
            && (self.start, self.end) != (other.start, other.end)
    }
}

impl<V> PartialEq for Hit<V> {
    fn eq(&self, other: &Self) -> bool {
        self.end == other.end && self.text == other.text
    }
}

impl<V> Eq for Hit<V> {}

impl<V> Ord for Hit<V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.end
            .cmp(&other.end)
            .then(self.start.cmp(&other.start))
            .then_with(|| self.text.cmp(&other.text))
    }
}

impl<V> PartialOrd for Hit<V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V: fmt::Display> fmt::Display for Hit<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}):{}:{}", self.start, self.end, self.text, self.value)
    }
}

/// A character of the input that no hit covered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MatchCharacter {
    /// The character itself
    pub character: char,

    /// Position of the character in the input
    pub position: usize,
}

impl MatchCharacter {
    /// Creates a new record.
    pub fn new(character: char, position: usize) -> Self {
        Self {
            character,
            position,
        }
    }
}

impl fmt::Display for MatchCharacter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.character, self.position)
    }
}

/// Ordered hits of one matching call.
#[derive(Debug, Clone, Serialize)]
pub struct Hits<V> {
    hits: Vec<Hit<V>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    unmatched: Option<Vec<MatchCharacter>>,
}

impl<V> Hits<V> {
    /// Creates an empty result without unmatched tracking.
    pub fn new() -> Self {
        Self {
            hits: Vec::new(),
            unmatched: None,
        }
    }

    /// Creates an empty result that records unmatched characters.
    pub fn with_unmatched_tracking() -> Self {
        Self {
            hits: Vec::new(),
            unmatched: Some(Vec::new()),
        }
    }

    /// Appends a hit in discovery order.
    pub fn add_hit(&mut self, hit: Hit<V>) {
        self.hits.push(hit);
    }

    /// Records an unmatched character, enabling tracking if it was off.
    pub fn add_unmatched(&mut self, character: char, position: usize) {
        self.unmatched
            .get_or_insert_with(Vec::new)
            .push(MatchCharacter::new(character, position));
    }

    /// Records every position of `text[start..end]` that no hit covers.
    ///
    /// Only has an effect when unmatched tracking is enabled.
    pub fn record_uncovered(&mut self, text: &[char], start: usize, end: usize) {
        let Some(unmatched) = self.unmatched.as_mut() else {
            return;
        };
        if start >= end {
            return;
        }

        let mut covered = vec![false; end - start];
        for hit in &self.hits {
            let from = hit.start.max(start);
            let to = hit.end.min(end);
            for slot in covered.iter_mut().take(to.saturating_sub(start)).skip(from - start) {
                *slot = true;
            }
        }

        unmatched.extend(
            covered
                .iter()
                .enumerate()
                .filter(|(_, &is_covered)| !is_covered)
                .map(|(offset, _)| MatchCharacter::new(text[start + offset], start + offset)),
        );
    }

    /// Whether unmatched characters are being recorded.
    pub fn tracks_unmatched(&self) -> bool {
        self.unmatched.is_some()
    }

    /// The hits in discovery order.
    pub fn hits(&self) -> &[Hit<V>] {
        &self.hits
    }

    /// Unmatched characters, empty when tracking is off.
    pub fn unmatched(&self) -> &[MatchCharacter] {
        self.unmatched.as_deref().unwrap_or(&[])
    }

    /// Number of hits.
    pub fn len(&self) -> usize {
        self.hits.len()
    }

    /// Checks if there are no hits.
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// Sorts hits by end position, then start position.
    pub fn sort(&mut self) {
        self.hits.sort();
    }

    /// Iterates over the hits in their current order.
    pub fn iter(&self) -> std::slice::Iter<'_, Hit<V>> {
        self.hits.iter()
    }

    /// Concatenates the text of all hits in their current order.
    pub fn matched_text(&self) -> String {
        self.hits.iter().map(Hit::text).collect()
    }

    /// Consumes the result and returns the hits.
    pub fn into_hits(self) -> Vec<Hit<V>> {
        self.hits
    }
}

impl<V> Default for Hits<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> IntoIterator for Hits<V> {
    type Item = Hit<V>;
    type IntoIter = std::vec::IntoIter<Hit<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.hits.into_iter()
    }
}

impl<'a, V> IntoIterator for &'a Hits<V> {
    type Item = &'a Hit<V>;
    type IntoIter = std::slice::Iter<'a, Hit<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.hits.iter()
    }
}
