//! Test modules for CJK Match.
//!
//! This module contains crate-level testing infrastructure:
//! - Configuration loading and validation tests
//! - Error aggregation and reporting tests
//! - Cross-component tests from lexicon text to match results
//! - Shared fixtures and proptest strategies

pub mod pipeline_tests;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{cjk_text_strategy, lexicon_strategy, sample_dictionary, TestFixture};
