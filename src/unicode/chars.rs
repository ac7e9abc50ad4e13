//! Code-point classification.
//!
//! These predicates operate on single code points and intentionally stay
//! ASCII-centric: phrase names are Latin letters, and the whitespace set is
//! limited to what an inline editor treats as word separators.

/// Named code points used by the phrase parser and paste handling.
pub mod code {
    pub const TAB: char = '\t';
    pub const NEW_LINE: char = '\n';
    pub const FORM_FEED: char = '\u{0C}';
    pub const RETURN: char = '\r';
    pub const SPACE: char = ' ';
    pub const NBSP: char = '\u{A0}';

    pub const HASH: char = '#';
}

/// Latin letter `A-Z`, case-insensitive.
///
/// Clearing bit 5 folds lowercase ASCII onto uppercase; any code point
/// outside ASCII keeps a high bit set and falls outside the range.
#[must_use]
pub const fn is_alpha(c: char) -> bool {
    let folded = (c as u32) & !0x20;
    folded >= 'A' as u32 && folded <= 'Z' as u32
}

/// Inline whitespace: space, no-break space or tab.
#[must_use]
pub const fn is_whitespace(c: char) -> bool {
    matches!(c, code::SPACE | code::NBSP | code::TAB)
}

/// Line terminator: `\n`, `\r` or form feed.
#[must_use]
pub const fn is_line_break(c: char) -> bool {
    matches!(c, code::NEW_LINE | code::RETURN | code::FORM_FEED)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_alpha_folds_case() {
        for c in ('a'..='z').chain('A'..='Z') {
            assert!(is_alpha(c), "{c:?} should be alpha");
        }
        for c in ['@', '[', '`', '{', '0', ' ', '#', 'é', 'Ж', '\u{141}'] {
            assert!(!is_alpha(c), "{c:?} should not be alpha");
        }
    }

    #[test]
    fn test_whitespace_set() {
        assert!(is_whitespace(' '));
        assert!(is_whitespace('\u{A0}'));
        assert!(is_whitespace('\t'));
        assert!(!is_whitespace('\n'));
        assert!(!is_whitespace('\u{2003}'));
    }

    #[test]
    fn test_line_break_set() {
        assert!(is_line_break(code::NEW_LINE));
        assert!(is_line_break(code::RETURN));
        assert!(is_line_break(code::FORM_FEED));
        assert!(!is_line_break(code::TAB));
        assert!(!is_line_break('\u{2028}'));
    }
}
