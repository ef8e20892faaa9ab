// Copyright (c) 2025 CJK Match Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! The closed set of matching strategies and the raw span they produce.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::MatchError;
use crate::data_structures::dict_trie::NodeId;

/// Greediness and direction of a matching pass.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum MatchStrategy {
    /// Shortest entry first, scanning left to right
    MinForward,
    /// Shortest entry first, scanning right to left
    MinReverse,
    /// Longest entry first, scanning left to right
    #[default]
    MaxForward,
    /// Longest entry first, scanning right to left
    MaxReverse,
}

impl MatchStrategy {
    /// All strategies, in declaration order.
    pub const ALL: [MatchStrategy; 4] = [
        MatchStrategy::MinForward,
        MatchStrategy::MinReverse,
        MatchStrategy::MaxForward,
        MatchStrategy::MaxReverse,
    ];

    /// Picks the minimum-length strategy for a direction.
    pub fn min(reverse: bool) -> Self {
        if reverse {
            MatchStrategy::MinReverse
        } else {
            MatchStrategy::MinForward
        }
    }

    /// Picks the maximum-length strategy for a direction.
    pub fn max(reverse: bool) -> Self {
        if reverse {
            MatchStrategy::MaxReverse
        } else {
            MatchStrategy::MaxForward
        }
    }

    /// Whether the strategy discovers hits right to left.
    pub fn is_reverse(self) -> bool {
        matches!(self, MatchStrategy::MinReverse | MatchStrategy::MaxReverse)
    }

    /// Whether the strategy prefers the longest entry.
    pub fn is_max(self) -> bool {
        matches!(self, MatchStrategy::MaxForward | MatchStrategy::MaxReverse)
    }

    /// Kebab-case name, as used in configuration files.
    pub fn as_str(self) -> &'static str {
        match self {
            MatchStrategy::MinForward => "min-forward",
            MatchStrategy::MinReverse => "min-reverse",
            MatchStrategy::MaxForward => "max-forward",
            MatchStrategy::MaxReverse => "max-reverse",
        }
    }
}

impl fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchStrategy {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MatchStrategy::ALL
            .into_iter()
            .find(|strategy| strategy.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| MatchError::UnknownStrategy(s.to_string()))
    }
}

/// A raw match: `[start, end)` of the input and the accepting node reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// Inclusive start position
    pub start: usize,

    /// Exclusive end position
    pub end: usize,

    /// Accepting node the span ends on
    pub node: NodeId,
}

impl Span {
    /// Creates a new span.
    pub fn new(start: usize, end: usize, node: NodeId) -> Self {
        Self { start, end, node }
    }

    /// Number of characters covered.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// A span from a scanner always covers at least one character.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_names_round_trip() {
        for strategy in MatchStrategy::ALL {
            assert_eq!(strategy.as_str().parse::<MatchStrategy>(), Ok(strategy));
        }
        assert_eq!("MAX-REVERSE".parse(), Ok(MatchStrategy::MaxReverse));
        assert!("longest".parse::<MatchStrategy>().is_err());
    }

    #[test]
    fn test_strategy_factories() {
        assert_eq!(MatchStrategy::min(false), MatchStrategy::MinForward);
        assert_eq!(MatchStrategy::min(true), MatchStrategy::MinReverse);
        assert_eq!(MatchStrategy::max(false), MatchStrategy::MaxForward);
        assert_eq!(MatchStrategy::max(true), MatchStrategy::MaxReverse);
        assert!(MatchStrategy::MaxReverse.is_reverse() && MatchStrategy::MaxReverse.is_max());
        assert!(!MatchStrategy::MinForward.is_reverse() && !MatchStrategy::MinForward.is_max());
    }

    #[test]
    fn test_strategy_serde_names() {
        let json = serde_json::to_string(&MatchStrategy::MinReverse).unwrap();
        assert_eq!(json, "\"min-reverse\"");
        let parsed: MatchStrategy = serde_json::from_str("\"max-forward\"").unwrap();
        assert_eq!(parsed, MatchStrategy::MaxForward);
    }
}
