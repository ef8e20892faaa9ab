// Copyright (c) 2025 CJK Match Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Chinese to pinyin conversion.
//!
//! Conversion runs maximum forward matching over a pinyin lexicon, so words
//! with context-dependent readings win over their single characters:
//!
//! ```text
//! 长=chang zhang
//! 长大=zhang da
//! ```
//!
//! A single-character entry lists alternative readings, the first one is used.
//! A multi-character entry lists one syllable per character.

use std::fmt;
use std::path::Path;

use serde::Serialize;

use super::chars::{is_cjk_char, is_special_char};
use super::lexicon::{
    build_trie, load_entries, read_entries, LexiconEntry, LexiconError, LexiconResult,
};
use crate::config::LexiconConfig;
use crate::data_structures::dict_trie::{DictTrie, DictTrieConfig};
use crate::data_structures::text_matcher::{
    Hit, MatchCharacter, MatchStrategy, MatcherOptions, TextMatcher,
};

/// One converted character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PinyinCharacter {
    /// The source character
    pub character: char,

    /// Position in the source text, in characters
    pub position: usize,

    /// Its pinyin syllable
    pub pinyin: String,
}

impl fmt::Display for PinyinCharacter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}:{}", self.character, self.position, self.pinyin)
    }
}

/// Detailed conversion result.
#[derive(Debug, Clone, Serialize)]
pub struct PinyinResult {
    /// The source text
    pub source: String,

    /// Converted characters in source order
    pub pinyin: Vec<PinyinCharacter>,

    /// First letter of every syllable
    pub first_letters: String,

    /// CJK characters with no reading
    pub unknown_cjk: Vec<MatchCharacter>,

    /// Other characters with no reading
    pub unknown_other: Vec<MatchCharacter>,
}

impl PinyinResult {
    /// Whether every character of the source was converted.
    pub fn is_full_convert(&self) -> bool {
        self.unknown_cjk.is_empty() && self.unknown_other.is_empty()
    }

    /// Syllables joined with `separator`.
    pub fn joined(&self, separator: &str) -> String {
        self.pinyin
            .iter()
            .map(|c| c.pinyin.as_str())
            .collect::<Vec<_>>()
            .join(separator)
    }
}

impl fmt::Display for PinyinResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.joined(" "))?;
        if !self.unknown_cjk.is_empty() {
            write!(f, ", unknown cjk: {}", join_characters(&self.unknown_cjk))?;
        }
        if !self.unknown_other.is_empty() {
            write!(f, ", unknown other: {}", join_characters(&self.unknown_other))?;
        }
        Ok(())
    }
}

fn join_characters(chars: &[MatchCharacter]) -> String {
    chars.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
}

/// Converts Chinese text to pinyin using a lexicon-backed trie.
#[derive(Debug, Clone)]
pub struct PinyinConverter {
    trie: DictTrie<Vec<String>>,
}

impl PinyinConverter {
    /// Wraps an already built pinyin trie.
    pub fn new(trie: DictTrie<Vec<String>>) -> Self {
        Self { trie }
    }

    /// Builds a converter from parsed lexicon entries.
    ///
    /// # Returns
    ///
    /// * `Err(LexiconError::MalformedLine)` - If a multi-character entry does
    ///   not have exactly one syllable per character.
    pub fn from_entries(
        entries: Vec<LexiconEntry>,
        config: &LexiconConfig,
        trie_config: DictTrieConfig,
    ) -> LexiconResult<Self> {
        let separator = config.value_separator.as_str();
        let trie = build_trie(entries, trie_config, |entry| {
            let syllables: Vec<String> = entry
                .value
                .split(separator)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();

            let chars = entry.pattern.chars().count();
            if chars > 1 && syllables.len() != chars {
                return Err(LexiconError::MalformedLine {
                    line: entry.line,
                    content: format!("{}{}{}", entry.pattern, config.separator, entry.value),
                });
            }
            Ok(syllables)
        })?;

        tracing::debug!(entries = trie.len(), "Pinyin lexicon built");
        Ok(Self::new(trie))
    }

    /// Builds a converter from lexicon text.
    pub fn from_lexicon(
        content: &str,
        config: &LexiconConfig,
        trie_config: DictTrieConfig,
    ) -> LexiconResult<Self> {
        Self::from_entries(read_entries(content, config)?, config, trie_config)
    }

    /// Builds a converter from a lexicon file.
    pub fn load<P: AsRef<Path>>(
        path: P,
        config: &LexiconConfig,
        trie_config: DictTrieConfig,
    ) -> LexiconResult<Self> {
        Self::from_entries(load_entries(path, config)?, config, trie_config)
    }

    /// The underlying trie.
    pub fn trie(&self) -> &DictTrie<Vec<String>> {
        &self.trie
    }

    /// First reading of a single character.
    pub fn cjk_convert(&self, ch: char) -> Option<&str> {
        let mut buf = [0u8; 4];
        self.trie
            .get(ch.encode_utf8(&mut buf))
            .and_then(|readings| readings.first())
            .map(String::as_str)
    }

    /// Converts a word to concatenated pinyin.
    ///
    /// Characters with no reading are dropped, except that whitespace and ASCII
    /// punctuation are copied through unless `ignore_whitespace` is set.
    ///
    /// # Arguments
    ///
    /// * `word` - The text to convert.
    /// * `ignore_whitespace` - Drop whitespace and punctuation too.
    /// * `need_first_letter` - Also build the string of syllable initials.
    ///
    /// # Returns
    ///
    /// `None` if no character could be converted, otherwise the pinyin and,
    /// when requested, the first letters.
    pub fn normal_convert(
        &self,
        word: &str,
        ignore_whitespace: bool,
        need_first_letter: bool,
    ) -> Option<(String, Option<String>)> {
        let chars: Vec<char> = word.chars().collect();
        let hits = self.matcher(false).find_all(&chars);
        if hits.is_empty() {
            return None;
        }

        let mut pinyin = String::new();
        let mut first_letters = need_first_letter.then(String::new);
        let keep = |pinyin: &mut String, from: usize, to: usize| {
            if !ignore_whitespace {
                pinyin.extend(
                    chars[from..to]
                        .iter()
                        .filter(|c| c.is_whitespace() || is_special_char(**c)),
                );
            }
        };

        let mut last_end = 0;
        for hit in &hits {
            keep(&mut pinyin, last_end, hit.start());
            for syllable in syllables(hit) {
                pinyin.push_str(syllable);
                if let Some(letters) = first_letters.as_mut() {
                    letters.extend(syllable.chars().next());
                }
            }
            last_end = hit.end();
        }
        keep(&mut pinyin, last_end, chars.len());

        Some((pinyin, first_letters))
    }

    /// Converts a word character by character.
    ///
    /// # Returns
    ///
    /// `None` if no character could be converted.
    pub fn full_convert(&self, word: &str) -> Option<PinyinResult> {
        let chars: Vec<char> = word.chars().collect();
        let hits = self.matcher(true).find_all(&chars);
        if hits.is_empty() {
            return None;
        }

        let mut result = PinyinResult {
            source: word.to_string(),
            pinyin: Vec::with_capacity(chars.len()),
            first_letters: String::new(),
            unknown_cjk: Vec::new(),
            unknown_other: Vec::new(),
        };

        for hit in &hits {
            let characters = hit.text().chars().enumerate();
            for ((offset, character), syllable) in characters.zip(syllables(hit)) {
                result.pinyin.push(PinyinCharacter {
                    character,
                    position: hit.start() + offset,
                    pinyin: syllable.to_string(),
                });
                result.first_letters.extend(syllable.chars().next());
            }
        }

        let (cjk, other): (Vec<MatchCharacter>, Vec<MatchCharacter>) = hits
            .unmatched()
            .iter()
            .copied()
            .partition(|c| is_cjk_char(c.character));
        result.unknown_cjk = cjk;
        result.unknown_other = other;

        tracing::trace!(word, converted = result.pinyin.len(), "Pinyin converted");
        Some(result)
    }

    fn matcher(&self, track_unmatched: bool) -> TextMatcher<'_, Vec<String>> {
        let options = MatcherOptions::new()
            .strategy(MatchStrategy::MaxForward)
            .track_unmatched(track_unmatched);
        TextMatcher::with_options(&self.trie, options)
    }
}

/// Syllables to emit for a hit: the first reading of a single character, or
/// one syllable per character of a word.
fn syllables(hit: &Hit<Vec<String>>) -> impl Iterator<Item = &str> {
    let take = if hit.len() == 1 { 1 } else { hit.value().len() };
    hit.value().iter().take(take).map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_structures::dict_trie::DictTrieError;

    const LEXICON: &str = "\
中=zhong zhòng
国=guo
人=ren
长=chang zhang
大=da
长大=zhang da
重庆=chong qing
";

    fn converter() -> PinyinConverter {
        PinyinConverter::from_lexicon(LEXICON, &LexiconConfig::default(), DictTrieConfig::default())
            .unwrap()
    }

    #[test]
    fn test_cjk_convert_returns_first_reading() {
        let converter = converter();
        assert_eq!(converter.cjk_convert('长'), Some("chang"));
        assert_eq!(converter.cjk_convert('国'), Some("guo"));
        assert_eq!(converter.cjk_convert('我'), None);
    }

    #[test]
    fn test_normal_convert_prefers_words() {
        let converter = converter();
        let (pinyin, letters) = converter.normal_convert("长大", true, true).unwrap();
        assert_eq!(pinyin, "zhangda");
        assert_eq!(letters.as_deref(), Some("zd"));

        let (pinyin, letters) = converter.normal_convert("中国人", true, false).unwrap();
        assert_eq!(pinyin, "zhongguoren");
        assert!(letters.is_none());
    }

    #[test]
    fn test_normal_convert_whitespace_handling() {
        let converter = converter();
        let (kept, _) = converter.normal_convert("中国 人-x", false, false).unwrap();
        assert_eq!(kept, "zhongguo ren-");

        let (dropped, _) = converter.normal_convert("中国 人-x", true, false).unwrap();
        assert_eq!(dropped, "zhongguoren");
    }

    #[test]
    fn test_nothing_converted_is_none() {
        let converter = converter();
        assert!(converter.normal_convert("hello", false, true).is_none());
        assert!(converter.full_convert("").is_none());
    }

    #[test]
    fn test_full_convert() {
        let converter = converter();
        let result = converter.full_convert("我长大了a").unwrap();

        let converted: Vec<(char, usize, &str)> = result
            .pinyin
            .iter()
            .map(|c| (c.character, c.position, c.pinyin.as_str()))
            .collect();
        assert_eq!(converted, vec![('长', 1, "zhang"), ('大', 2, "da")]);
        assert_eq!(result.first_letters, "zd");

        let cjk: Vec<char> = result.unknown_cjk.iter().map(|c| c.character).collect();
        let other: Vec<char> = result.unknown_other.iter().map(|c| c.character).collect();
        assert_eq!(cjk, vec!['我', '了']);
        assert_eq!(other, vec!['a']);
        assert!(!result.is_full_convert());
        assert_eq!(result.joined(" "), "zhang da");
    }

    #[test]
    fn test_full_convert_everything_known() {
        let result = converter().full_convert("重庆人").unwrap();
        assert!(result.is_full_convert());
        assert_eq!(result.joined("'"), "chong'qing'ren");
        assert_eq!(result.to_string(), "重庆人 -> chong qing ren");
    }

    #[test]
    fn test_syllable_count_must_match() {
        let result = PinyinConverter::from_lexicon(
            "中国=zhong\n",
            &LexiconConfig::default(),
            DictTrieConfig::default(),
        );
        assert!(matches!(
            result,
            Err(LexiconError::MalformedLine { line: 1, .. })
        ));
    }

    #[test]
    fn test_pattern_length_limit_applies() {
        let result = PinyinConverter::from_lexicon(
            LEXICON,
            &LexiconConfig::default(),
            DictTrieConfig { max_depth: 1 },
        );
        match result {
            Err(LexiconError::Entry { line, source }) => {
                assert_eq!(line, 6);
                assert!(matches!(source, DictTrieError::PatternTooLong { .. }));
            }
            other => panic!("Expected rejected entry, got {other:?}"),
        }
    }
}
