//! Lexicon configuration module.
//!
//! Describes where dictionary files live and how their lines are laid out.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Lexicon file configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconConfig {
    /// Dictionary file used when none is given on the command line
    pub path: Option<PathBuf>,

    /// Separator between the entry and its value
    pub separator: String,

    /// Separator between the syllables of a multi-character reading
    pub value_separator: String,

    /// Lines starting with this prefix are skipped
    pub comment_prefix: String,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            path: None,
            separator: "=".to_string(),
            value_separator: " ".to_string(),
            comment_prefix: "#".to_string(),
        }
    }
}

impl Validate for LexiconConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.separator.is_empty() {
            return Err(ConfigError::ValidationError(
                "lexicon.separator must not be empty".to_string(),
            ));
        }

        if self.value_separator.is_empty() {
            return Err(ConfigError::ValidationError(
                "lexicon.value_separator must not be empty".to_string(),
            ));
        }

        if self.separator == self.value_separator {
            return Err(ConfigError::ValidationError(
                "lexicon.separator and lexicon.value_separator must differ".to_string(),
            ));
        }

        if self.comment_prefix.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "lexicon.comment_prefix must not be blank".to_string(),
            ));
        }

        Ok(())
    }
}
