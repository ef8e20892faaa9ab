// Copyright (c) 2025 CJK Match Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Integration tests for lexicon loading and pinyin conversion.

use std::io::Write;

use cjk_match_lib::config::LexiconConfig;
use cjk_match_lib::data_structures::dict_trie::DictTrieConfig;
use cjk_match_lib::nlp::{LexiconError, PinyinConverter};

const LEXICON: &str = "\
# single characters list alternative readings
银=yin
行=xing hang
人=ren
# words list one syllable per character
银行=yin hang
";

fn load() -> PinyinConverter {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(LEXICON.as_bytes()).unwrap();
    PinyinConverter::load(file.path(), &LexiconConfig::default(), DictTrieConfig::default()).unwrap()
}

#[test]
fn test_word_reading_beats_character_reading() {
    let converter = load();
    assert_eq!(converter.cjk_convert('行'), Some("xing"));

    let (pinyin, letters) = converter.normal_convert("银行", true, true).unwrap();
    assert_eq!(pinyin, "yinhang");
    assert_eq!(letters.as_deref(), Some("yh"));
}

#[test]
fn test_full_convert_json() {
    let converter = load();
    let result = converter.full_convert("银行人x").unwrap();

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["first_letters"], "yhr");
    assert_eq!(json["pinyin"][1]["character"], "行");
    assert_eq!(json["pinyin"][1]["position"], 1);
    assert_eq!(json["pinyin"][1]["pinyin"], "hang");
    assert_eq!(json["unknown_other"][0]["character"], "x");
    assert!(json["unknown_cjk"].as_array().unwrap().is_empty());
}

#[test]
fn test_custom_separators() {
    let config = LexiconConfig {
        separator: ":".to_string(),
        value_separator: ",".to_string(),
        ..Default::default()
    };
    let converter = PinyinConverter::from_lexicon("银行:yin,hang\n", &config, DictTrieConfig::default()).unwrap();
    let (pinyin, _) = converter.normal_convert("去银行", false, false).unwrap();
    assert_eq!(pinyin, "yinhang");
}

#[test]
fn test_missing_lexicon_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = PinyinConverter::load(
        dir.path().join("pinyin.txt"),
        &LexiconConfig::default(),
        DictTrieConfig::default(),
    );
    assert!(matches!(result, Err(LexiconError::Io(_))));
}
