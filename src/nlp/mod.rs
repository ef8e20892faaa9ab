// Copyright (c) 2025 CJK Match Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Text processing built on the dictionary matcher.
//!
//! - [`lexicon`]: reading `pattern=value` dictionary files
//! - [`pinyin`]: Chinese to pinyin conversion
//! - [`chars`]: character classes shared by both

pub mod chars;
pub mod lexicon;
pub mod pinyin;

pub use chars::{is_cjk_char, is_special_char};
pub use lexicon::{
    build_trie, load_dictionary, load_entries, read_entries, LexiconEntry, LexiconError,
    LexiconResult,
};
pub use pinyin::{PinyinCharacter, PinyinConverter, PinyinResult};
