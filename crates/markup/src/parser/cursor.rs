//! Single-character lookahead over the input.

use std::str::Chars;

/// A character reader with one character of pushback, so the parser can
/// look at the character after `]` without consuming it.
pub(crate) struct Cursor<'a> {
    chars: Chars<'a>,
    buffered: Option<char>,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Cursor {
            chars: input.chars(),
            buffered: None,
        }
    }

    /// Consume and return the next character, `None` at end of input.
    pub(crate) fn next(&mut self) -> Option<char> {
        self.buffered.take().or_else(|| self.chars.next())
    }

    /// Look at the next character without consuming it.
    pub(crate) fn peek(&mut self) -> Option<char> {
        if self.buffered.is_none() {
            self.buffered = self.chars.next();
        }
        self.buffered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_consumes_in_order() {
        let mut cursor = Cursor::new("ab");
        assert_eq!(cursor.next(), Some('a'));
        assert_eq!(cursor.next(), Some('b'));
        assert_eq!(cursor.next(), None);
    }

    #[test]
    fn peek_does_not_consume() {
        let mut cursor = Cursor::new("ab");
        assert_eq!(cursor.peek(), Some('a'));
        assert_eq!(cursor.peek(), Some('a'));
        assert_eq!(cursor.next(), Some('a'));
        assert_eq!(cursor.next(), Some('b'));
    }

    #[test]
    fn peek_at_end() {
        let mut cursor = Cursor::new("");
        assert_eq!(cursor.peek(), None);
        assert_eq!(cursor.next(), None);
    }

    #[test]
    fn multibyte_characters() {
        let mut cursor = Cursor::new("日本");
        assert_eq!(cursor.peek(), Some('日'));
        assert_eq!(cursor.next(), Some('日'));
        assert_eq!(cursor.next(), Some('本'));
        assert_eq!(cursor.next(), None);
    }
}
