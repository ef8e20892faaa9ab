//! Cross-component tests from lexicon text to match results.

use proptest::prelude::*;

use crate::config::{CjkMatchConfig, LexiconConfig};
use crate::data_structures::dict_trie::{DictTrieConfig, SharedDictionary};
use crate::data_structures::text_matcher::{MatchStrategy, OverlapResolver, TextMatcher};
use crate::nlp::lexicon::{build_trie, read_entries};
use crate::tests::{cjk_text_strategy, lexicon_strategy, sample_dictionary};

/// Test that configured options drive matching over a lexicon-built trie.
#[test]
fn test_configured_matching() {
    let mut config = CjkMatchConfig::default();
    config.matcher.strategy = MatchStrategy::MinForward;
    config.matcher.track_unmatched = true;

    let entries = read_entries("中国=CN\n人=P\n", &config.lexicon).unwrap();
    let trie = build_trie(entries, config.matcher.trie_config(), |e| Ok(e.value.clone())).unwrap();

    let hits = TextMatcher::with_options(&trie, config.matcher.matcher_options()).find_str("我是中国人");
    let values: Vec<&str> = hits.iter().map(|h| h.value().as_str()).collect();
    assert_eq!(values, vec!["CN", "P"]);
    assert_eq!(hits.unmatched().len(), 2);
}

/// Test the overlap resolver on the shared sample dictionary.
#[test]
fn test_overlap_on_sample_dictionary() {
    let mut trie = sample_dictionary();
    trie.build_failure_links().unwrap();

    let hits = OverlapResolver::new(&trie).unwrap().find_str("中国人民");
    let found: Vec<(usize, usize, &str)> = hits
        .iter()
        .map(|h| (h.start(), h.end(), h.value().as_str()))
        .collect();
    assert_eq!(found, vec![(0, 3, "CNP"), (2, 3, "P")]);
}

/// Test that a shared dictionary serves JSON-serializable hits.
#[test]
fn test_shared_dictionary_json_output() {
    let dict = SharedDictionary::new(sample_dictionary());
    let mut hits = dict.find_str(MatchStrategy::MaxReverse, "北京大学");
    hits.sort();

    let json = serde_json::to_value(&hits).unwrap();
    assert_eq!(json["hits"][0]["text"], "大学");
    assert_eq!(json["hits"][0]["start"], 2);
    assert!(json.get("unmatched").is_none());
}

proptest! {
    // Property: every lexicon line ends up in the trie with the last value given for it
    #[test]
    fn prop_lexicon_entries_are_found((text, entries) in lexicon_strategy()) {
        let parsed = read_entries(&text, &LexiconConfig::default()).unwrap();
        prop_assert_eq!(parsed.len(), entries.len());

        let trie = build_trie(parsed, DictTrieConfig::default(), |e| Ok(e.value.clone())).unwrap();
        for (pattern, _) in &entries {
            let last = entries.iter().rev().find(|(p, _)| p == pattern).map(|(_, v)| v);
            prop_assert_eq!(trie.get(pattern), last);
        }
    }

    // Property: reverse strategies report hits right to left
    #[test]
    fn prop_reverse_hits_sorted_descending(text in cjk_text_strategy()) {
        let trie = sample_dictionary();
        for strategy in [MatchStrategy::MinReverse, MatchStrategy::MaxReverse] {
            let hits = TextMatcher::new(&trie, strategy).find_str(&text);
            let starts: Vec<usize> = hits.iter().map(|h| h.start()).collect();
            let mut descending = starts.clone();
            descending.sort_unstable_by(|a, b| b.cmp(a));
            prop_assert_eq!(starts, descending);
        }
    }
}
