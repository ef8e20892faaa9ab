// Copyright (c) 2025 CJK Match Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Per-strategy expectations on fixed dictionaries.

use test_case::test_case;

use crate::data_structures::dict_trie::DictTrie;
use crate::data_structures::text_matcher::{MatchStrategy, MatcherOptions, TextMatcher};

fn dictionary() -> DictTrie<&'static str> {
    DictTrie::from_entries(vec![
        ("中国", "CN"),
        ("中国人", "CNP"),
        ("人", "P"),
        ("人民", "PM"),
    ])
    .unwrap()
}

fn run(strategy: MatchStrategy, text: &str) -> Vec<(usize, usize, &'static str)> {
    let trie = dictionary();
    TextMatcher::new(&trie, strategy)
        .find_str(text)
        .iter()
        .map(|hit| (hit.start(), hit.end(), *hit.value()))
        .collect()
}

#[test_case(MatchStrategy::MinForward, vec![(0, 2, "CN"), (2, 3, "P")] ; "min forward")]
#[test_case(MatchStrategy::MinReverse, vec![(2, 3, "P"), (0, 2, "CN")] ; "min reverse")]
#[test_case(MatchStrategy::MaxForward, vec![(0, 3, "CNP")] ; "max forward")]
#[test_case(MatchStrategy::MaxReverse, vec![(0, 3, "CNP")] ; "max reverse")]
fn test_nested_entries(strategy: MatchStrategy, expected: Vec<(usize, usize, &'static str)>) {
    assert_eq!(run(strategy, "中国人"), expected);
}

#[test_case(MatchStrategy::MinForward, vec![(2, 4, "CN"), (4, 5, "P")] ; "min forward")]
#[test_case(MatchStrategy::MinReverse, vec![(4, 5, "P"), (2, 4, "CN")] ; "min reverse")]
#[test_case(MatchStrategy::MaxForward, vec![(2, 5, "CNP")] ; "max forward")]
#[test_case(MatchStrategy::MaxReverse, vec![(4, 6, "PM")] ; "max reverse")]
fn test_competing_entries(strategy: MatchStrategy, expected: Vec<(usize, usize, &'static str)>) {
    assert_eq!(run(strategy, "我是中国人民"), expected);
}

#[test_case(MatchStrategy::MinForward ; "min forward")]
#[test_case(MatchStrategy::MinReverse ; "min reverse")]
#[test_case(MatchStrategy::MaxForward ; "max forward")]
#[test_case(MatchStrategy::MaxReverse ; "max reverse")]
fn test_no_entries_in_text(strategy: MatchStrategy) {
    assert!(run(strategy, "你好世界").is_empty());
    assert!(run(strategy, "").is_empty());
}

#[test_case(MatchStrategy::MinForward ; "min forward")]
#[test_case(MatchStrategy::MinReverse ; "min reverse")]
#[test_case(MatchStrategy::MaxForward ; "max forward")]
#[test_case(MatchStrategy::MaxReverse ; "max reverse")]
fn test_deleted_entry_never_reported(strategy: MatchStrategy) {
    let mut trie = dictionary();
    assert!(trie.mark_deleted("中国人"));
    let hits = TextMatcher::new(&trie, strategy).find_str("中国人");
    assert!(hits.iter().all(|hit| hit.text() != "中国人"));
    assert!(!hits.is_empty());
}

#[test_case(MatchStrategy::MinForward, "我是民" ; "min forward")]
#[test_case(MatchStrategy::MaxForward, "我是民" ; "max forward")]
#[test_case(MatchStrategy::MaxReverse, "我是中国" ; "max reverse")]
fn test_unmatched_characters(strategy: MatchStrategy, expected: &str) {
    let trie = dictionary();
    let options = MatcherOptions::new()
        .strategy(strategy)
        .track_unmatched(true);
    let hits = TextMatcher::with_options(&trie, options).find_str("我是中国人民");
    let unmatched: String = hits.unmatched().iter().map(|c| c.character).collect();
    assert_eq!(unmatched, expected);
}
