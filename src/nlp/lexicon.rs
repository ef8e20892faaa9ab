// Copyright (c) 2025 CJK Match Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lexicon file reader.
//!
//! A lexicon is a UTF-8 text file with one `pattern<separator>value` entry per
//! line. Blank lines and lines starting with the comment prefix are skipped.
//!
//! ```text
//! # place names
//! 中国=zhong guo
//! 北京=bei jing
//! ```

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::LexiconConfig;
use crate::data_structures::dict_trie::{DictTrie, DictTrieConfig, DictTrieError};

/// Errors raised while reading a lexicon.
#[derive(Error, Debug)]
pub enum LexiconError {
    /// A line that is neither blank, a comment, nor a `pattern<sep>value` entry.
    #[error("Malformed lexicon line {line}: {content:?}")]
    MalformedLine {
        /// 1-based line number
        line: usize,
        /// The offending line
        content: String,
    },

    /// An entry the trie refused.
    #[error("Lexicon line {line} rejected: {source}")]
    Entry {
        /// 1-based line number
        line: usize,
        /// Why the trie refused it
        #[source]
        source: DictTrieError,
    },

    /// The file could not be read.
    #[error("Failed to read lexicon: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for lexicon operations.
pub type LexiconResult<T> = Result<T, LexiconError>;

/// One parsed lexicon entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconEntry {
    /// 1-based line number the entry came from
    pub line: usize,

    /// The dictionary pattern
    pub pattern: String,

    /// The raw value text
    pub value: String,
}

/// Parses lexicon entries from text.
///
/// # Arguments
///
/// * `content` - The lexicon text.
/// * `config` - Separator and comment settings.
///
/// # Returns
///
/// * `Ok(Vec<LexiconEntry>)` - Entries in file order.
/// * `Err(LexiconError::MalformedLine)` - On the first line without a separator,
///   or with an empty pattern or value.
pub fn read_entries(content: &str, config: &LexiconConfig) -> LexiconResult<Vec<LexiconEntry>> {
    let mut entries = Vec::new();

    for (index, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with(config.comment_prefix.as_str()) {
            continue;
        }

        let malformed = || LexiconError::MalformedLine {
            line: index + 1,
            content: raw.to_string(),
        };
        let (pattern, value) = line.split_once(config.separator.as_str()).ok_or_else(malformed)?;
        let (pattern, value) = (pattern.trim(), value.trim());
        if pattern.is_empty() || value.is_empty() {
            return Err(malformed());
        }

        entries.push(LexiconEntry {
            line: index + 1,
            pattern: pattern.to_string(),
            value: value.to_string(),
        });
    }

    Ok(entries)
}

/// Reads and parses a lexicon file.
pub fn load_entries<P: AsRef<Path>>(
    path: P,
    config: &LexiconConfig,
) -> LexiconResult<Vec<LexiconEntry>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let entries = read_entries(&content, config)?;
    tracing::debug!(path = %path.display(), entries = entries.len(), "Lexicon loaded");
    Ok(entries)
}

/// Builds a trie from parsed entries, mapping each value through `convert`.
///
/// Later entries overwrite earlier ones with the same pattern.
pub fn build_trie<V, F>(
    entries: Vec<LexiconEntry>,
    trie_config: DictTrieConfig,
    mut convert: F,
) -> LexiconResult<DictTrie<V>>
where
    F: FnMut(&LexiconEntry) -> LexiconResult<V>,
{
    let mut trie = DictTrie::with_config(trie_config);
    for entry in &entries {
        let value = convert(entry)?;
        trie.insert(&entry.pattern, value)
            .map_err(|source| LexiconError::Entry {
                line: entry.line,
                source,
            })?;
    }
    Ok(trie)
}

/// Loads a lexicon file into a trie of string values.
pub fn load_dictionary<P: AsRef<Path>>(
    path: P,
    config: &LexiconConfig,
    trie_config: DictTrieConfig,
) -> LexiconResult<DictTrie<String>> {
    let entries = load_entries(path, config)?;
    build_trie(entries, trie_config, |entry| Ok(entry.value.clone()))
}
