use crate::error::{Error, ErrorKind};

/// Scanning state over one header occurrence.
///
/// `position` is always a char boundary of `input`: single-byte steps only
/// happen over ASCII, anything else goes through `seek`.
pub(crate) struct Cursor<'a> {
    input: &'a str,
    position: usize,
    line: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a str, line: usize) -> Self {
        Self {
            input,
            position: 0,
            line,
        }
    }

    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.position).copied()
    }

    #[inline]
    pub fn bump(&mut self) {
        if self.position < self.input.len() {
            self.position += 1;
        }
    }

    /// Consumes `byte` if it is next, returning whether it did.
    pub fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.position += 1;
            true
        } else {
            false
        }
    }

    pub fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t')) {
            self.position += 1;
        }
    }

    /// Advances while `pred` holds and returns the consumed text.
    pub fn take_while(&mut self, pred: impl Fn(u8) -> bool) -> &'a str {
        let start = self.position;
        while let Some(byte) = self.peek() {
            if !byte.is_ascii() || !pred(byte) {
                break;
            }
            self.position += 1;
        }
        &self.input[start..self.position]
    }

    pub fn input(&self) -> &'a str {
        self.input
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Moves to `position`, which must lie on a char boundary.
    pub fn seek(&mut self, position: usize) {
        debug_assert!(self.input.is_char_boundary(position));
        self.position = position.min(self.input.len());
    }

    pub fn error(&self, kind: ErrorKind) -> Error {
        Error::new(kind, self.line, self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::is_token_byte;

    #[rstest::rstest]
    fn test_take_while_stops_at_separator() {
        let mut cursor = Cursor::new("  for=x", 3);
        cursor.skip_whitespace();
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.take_while(is_token_byte), "for");
        assert!(cursor.eat(b'='));
        assert!(!cursor.eat(b'='));
        assert_eq!(cursor.take_while(is_token_byte), "x");
        assert_eq!(cursor.peek(), None);

        let err = cursor.error(ErrorKind::ExpectedComma);
        assert_eq!(err.line(), 3);
        assert_eq!(err.offset(), 7);
    }

    #[rstest::rstest]
    fn test_bump_at_end_is_noop() {
        let mut cursor = Cursor::new("a", 0);
        cursor.bump();
        cursor.bump();
        assert_eq!(cursor.position(), 1);
    }

    #[rstest::rstest]
    fn test_take_while_never_splits_utf8() {
        let mut cursor = Cursor::new("ab\u{e9}c", 0);
        assert_eq!(cursor.take_while(|_| true), "ab");
        assert_eq!(cursor.position(), 2);
    }
}
