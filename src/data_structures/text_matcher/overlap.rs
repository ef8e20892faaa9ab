// Copyright (c) 2025 CJK Match Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Overlap resolution over failure links.
//!
//! A longer match can hide a shorter entry that is one of its suffixes. With
//! failure links built, that entry is one hop away from the longer match's
//! terminal node, so it can be reported without rescanning the input.
//!
//! Exactly one failure hop is taken per node. Entries reachable only through a
//! longer failure chain are not reported.

use super::error::{check_range, MatchError, MatchResult};
use super::hit::{Hit, Hits};
use super::matcher::TextMatcher;
use super::strategy::MatchStrategy;
use crate::data_structures::dict_trie::{DictTrie, NodeId, ROOT};

/// Emits hits for a node and the suffix entry its failure link points to.
#[derive(Debug, Clone, Copy)]
pub struct OverlapResolver<'a, V> {
    trie: &'a DictTrie<V>,
}

impl<'a, V> OverlapResolver<'a, V> {
    /// Creates a resolver over a trie with failure links.
    ///
    /// # Returns
    ///
    /// * `Ok(OverlapResolver)` - If failure links are built.
    /// * `Err(MatchError::FailureLinksMissing)` - Otherwise.
    pub fn new(trie: &'a DictTrie<V>) -> MatchResult<Self> {
        if trie.has_failure_links() {
            Ok(Self { trie })
        } else {
            Err(MatchError::FailureLinksMissing)
        }
    }

    /// The suffix entry one failure hop from `node`, if it accepts.
    pub fn suffix_entry(&self, node: NodeId) -> Option<NodeId> {
        self.trie
            .failure(node)
            .filter(|&target| target != ROOT && self.trie.accepts(target))
    }
}

impl<V: Clone> OverlapResolver<'_, V> {
    /// Appends the hits for `node` reached at `end`.
    ///
    /// 1. `node` itself, if accepting;
    /// 2. the node one failure hop away, if accepting, ending at the same position.
    ///
    /// # Returns
    ///
    /// The number of hits appended.
    pub fn append_hits(&self, hits: &mut Hits<V>, end: usize, node: NodeId) -> usize {
        let mut appended = 0;
        if let Some(hit) = self.hit_at(end, node) {
            hits.add_hit(hit);
            appended += 1;
        }
        if let Some(hit) = self.suffix_entry(node).and_then(|suffix| self.hit_at(end, suffix)) {
            hits.add_hit(hit);
            appended += 1;
        }
        appended
    }

    /// Runs maximum forward matching over `text[start..start + len]` and adds
    /// the suffix entry of every hit right after it.
    pub fn find(&self, text: &[char], start: usize, len: usize) -> MatchResult<Hits<V>> {
        let end = check_range(text.len(), start, len)?;
        let hits = self.collect_range(text, start, end);
        tracing::debug!(start, end, hits = hits.len(), "Overlaps resolved");
        Ok(hits)
    }

    /// Same as [`find`](Self::find) over a whole string.
    pub fn find_str(&self, text: &str) -> Hits<V> {
        let chars: Vec<char> = text.chars().collect();
        self.collect_range(&chars, 0, chars.len())
    }

    fn collect_range(&self, text: &[char], start: usize, end: usize) -> Hits<V> {
        let matcher = TextMatcher::new(self.trie, MatchStrategy::MaxForward);
        let mut hits = Hits::new();
        for span in matcher.scan_range(text, start, end) {
            self.append_hits(&mut hits, span.end, span.node);
        }
        hits
    }

    fn hit_at(&self, end: usize, node: NodeId) -> Option<Hit<V>> {
        let text = self.trie.output(node)?;
        let value = self.trie.value(node)?;
        Some(Hit::new(end, text, value.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DictTrie<&'static str> {
        let mut trie =
            DictTrie::from_entries(vec![("中国", "CN"), ("中国人", "CNP"), ("人", "P")]).unwrap();
        trie.build_failure_links().unwrap();
        trie
    }

    #[test]
    fn test_requires_failure_links() {
        let trie: DictTrie<u8> = DictTrie::from_entries(vec![("a", 1)]).unwrap();
        assert_eq!(
            OverlapResolver::new(&trie).unwrap_err(),
            MatchError::FailureLinksMissing
        );
    }

    #[test]
    fn test_overlap_scenario() {
        let trie = sample();
        let resolver = OverlapResolver::new(&trie).unwrap();
        let hits = resolver.find_str("中国人");

        let found: Vec<(usize, usize, &str)> = hits
            .iter()
            .map(|h| (h.start(), h.end(), *h.value()))
            .collect();
        assert_eq!(found, vec![(0, 3, "CNP"), (2, 3, "P")]);
    }

    #[test]
    fn test_append_hits_on_terminal_node() {
        let trie = sample();
        let resolver = OverlapResolver::new(&trie).unwrap();
        let node = trie.find_node("中国人").unwrap();

        let mut hits = Hits::new();
        assert_eq!(resolver.append_hits(&mut hits, 3, node), 2);
        assert_eq!(hits.matched_text(), "中国人人");

        // Non-accepting node with a non-accepting failure target adds nothing
        let zhong = trie.find_node("中").unwrap();
        assert_eq!(resolver.append_hits(&mut hits, 1, zhong), 0);
    }

    #[test]
    fn test_single_hop_only() {
        // abcd -> bcd (not an entry) -> cd (entry): the second hop is not taken
        let mut trie = DictTrie::from_entries(vec![("abcd", 1), ("bcde", 2), ("cd", 3)]).unwrap();
        trie.build_failure_links().unwrap();
        let resolver = OverlapResolver::new(&trie).unwrap();

        let abcd = trie.find_node("abcd").unwrap();
        assert_eq!(trie.failure(abcd), trie.find_node("bcd"));
        assert_eq!(resolver.suffix_entry(abcd), None);

        let hits = resolver.find_str("abcd");
        assert_eq!(hits.matched_text(), "abcd");
    }

    #[test]
    fn test_deleted_suffix_not_reported() {
        let mut trie = sample();
        trie.mark_deleted("人");
        let resolver = OverlapResolver::new(&trie).unwrap();
        let hits = resolver.find_str("中国人");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits.hits()[0].text(), "中国人");
    }

    #[test]
    fn test_range_checked() {
        let trie = sample();
        let resolver = OverlapResolver::new(&trie).unwrap();
        let text: Vec<char> = "中国人".chars().collect();
        assert!(resolver.find(&text, 2, 5).is_err());
        assert!(resolver.find(&text, 3, 0).unwrap().is_empty());
    }

    #[test]
    fn test_find_str_matches_full_range_find() {
        let trie = sample();
        let resolver = OverlapResolver::new(&trie).unwrap();
        let text: Vec<char> = "我中国人中国".chars().collect();

        let ranges = |hits: &Hits<&str>| -> Vec<(usize, usize)> {
            hits.iter().map(|h| (h.start(), h.end())).collect()
        };
        let full = resolver.find(&text, 0, text.len()).unwrap();
        assert_eq!(ranges(&resolver.find_str("我中国人中国")), ranges(&full));
        assert_eq!(ranges(&full), vec![(1, 4), (3, 4), (4, 6)]);

        let window = resolver.find(&text, 1, 3).unwrap();
        assert_eq!(ranges(&window), vec![(1, 4), (3, 4)]);
    }
}
