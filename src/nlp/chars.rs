// Copyright (c) 2025 CJK Match Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Character classes used when converting text.

/// Whether `c` is a CJK unified ideograph (basic block or extension A).
pub fn is_cjk_char(c: char) -> bool {
    matches!(c, '\u{4E00}'..='\u{9FFF}' | '\u{3400}'..='\u{4DBF}')
}

/// Whether `c` is ASCII punctuation, kept verbatim in converted output.
pub fn is_special_char(c: char) -> bool {
    c.is_ascii_punctuation()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case('中', true ; "basic block")]
    #[test_case('\u{9FFF}', true ; "basic block end")]
    #[test_case('㐀', true ; "extension a")]
    #[test_case('a', false ; "ascii letter")]
    #[test_case('，', false ; "fullwidth comma")]
    #[test_case('あ', false ; "hiragana")]
    fn test_is_cjk_char(c: char, expected: bool) {
        assert_eq!(is_cjk_char(c), expected);
    }

    #[test]
    fn test_is_special_char() {
        assert!(is_special_char('-'));
        assert!(is_special_char('.'));
        assert!(!is_special_char(' '));
        assert!(!is_special_char('中'));
        assert!(!is_special_char('7'));
    }
}
