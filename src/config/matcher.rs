//! Matcher configuration module.
//!
//! Selects the default strategy and the limits applied while building
//! dictionaries.

use super::{ConfigResult, Validate};
use crate::data_structures::dict_trie::DictTrieConfig;
use crate::data_structures::text_matcher::{MatchStrategy, MatcherOptions};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Upper bound accepted for `max_pattern_len`.
const MAX_PATTERN_LEN_LIMIT: usize = 4096;

/// Matcher configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatcherConfig {
    /// Strategy used when none is given on the command line
    pub strategy: MatchStrategy,

    /// Whether to report suffix entries hidden inside maximum matches
    pub resolve_overlaps: bool,

    /// Whether to record characters no entry covers
    pub track_unmatched: bool,

    /// Maximum number of characters in a dictionary entry
    pub max_pattern_len: usize,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            strategy: MatchStrategy::MaxForward,
            resolve_overlaps: false,
            track_unmatched: false,
            max_pattern_len: DictTrieConfig::default().max_depth,
        }
    }
}

impl MatcherConfig {
    /// Trie limits derived from this configuration.
    pub fn trie_config(&self) -> DictTrieConfig {
        DictTrieConfig {
            max_depth: self.max_pattern_len,
        }
    }

    /// Matcher options derived from this configuration.
    pub fn matcher_options(&self) -> MatcherOptions {
        MatcherOptions::new()
            .strategy(self.strategy)
            .track_unmatched(self.track_unmatched)
    }
}

impl Validate for MatcherConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_pattern_len == 0 || self.max_pattern_len > MAX_PATTERN_LEN_LIMIT {
            return Err(ConfigError::ValueOutOfRange {
                key: "matcher.max_pattern_len".to_string(),
                message: format!("must be between 1 and {MAX_PATTERN_LEN_LIMIT}"),
            });
        }

        // Overlaps are resolved on top of maximum forward matching only
        if self.resolve_overlaps && self.strategy != MatchStrategy::MaxForward {
            return Err(ConfigError::ValidationError(format!(
                "resolve_overlaps requires strategy max-forward, got {}",
                self.strategy
            )));
        }

        Ok(())
    }
}
