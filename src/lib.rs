//! CJK Match Library
//!
//! Dictionary-driven matching of Chinese text: a character trie with soft
//! deletion and failure links, four matching strategies, overlap resolution,
//! and the lexicon and pinyin tooling built on top of them.
//!
//! # Architecture
//!
//! - [`data_structures::dict_trie`]: the dictionary, built once and shared read-only
//! - [`data_structures::text_matcher`]: stateless matchers over a borrowed trie
//! - [`nlp`]: lexicon files and pinyin conversion
//! - [`config`] and [`error`]: layered configuration and typed errors
//!
//! # Example
//!
//! ```
//! use cjk_match_lib::data_structures::{DictTrie, MatchStrategy, TextMatcher};
//!
//! let trie = DictTrie::from_entries(vec![("中国", 1), ("中国人", 2), ("人", 3)]).unwrap();
//! let hits = TextMatcher::new(&trie, MatchStrategy::MinForward).find_str("中国人");
//! let values: Vec<i32> = hits.iter().map(|hit| *hit.value()).collect();
//! assert_eq!(values, vec![1, 3]);
//! ```

pub mod config;
pub mod data_structures;
pub mod error;
pub mod nlp;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for CJK Match.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function.
///
/// Installs the tracing error reporter and loads the default configuration.
pub fn init() -> error::CjkMatchResult<()> {
    error::set_error_reporter(std::sync::Arc::new(error::TracingErrorReporter::new()));

    config::init_default_config()?;

    Ok(())
}
