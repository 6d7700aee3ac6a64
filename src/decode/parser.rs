use std::borrow::Cow;

use memchr::memchr2;
use smallvec::SmallVec;
use smol_str::SmolStr;

use crate::constants::{is_token_byte, KEY_BY, KEY_FOR, KEY_HOST, KEY_PROTO};
use crate::decode::cursor::Cursor;
use crate::decode::node::parse_node;
use crate::error::ErrorKind;
use crate::types::{ForwardedElement, Node};
use crate::Result;

/// Recursive-descent parser for one header occurrence (RFC 7239 section 4):
///
/// ```text
/// Forwarded         = 1#forwarded-element
/// forwarded-element = [ forwarded-pair ] *( ";" [ forwarded-pair ] )
/// forwarded-pair    = token "=" value
/// value             = token / quoted-string
/// ```
pub(crate) struct LineParser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> LineParser<'a> {
    pub fn new(input: &'a str, line: usize) -> Self {
        Self {
            cursor: Cursor::new(input, line),
        }
    }

    /// Appends every element of the line to `out`.
    pub fn parse_into(&mut self, out: &mut Vec<ForwardedElement>) -> Result<()> {
        out.push(self.element()?);
        loop {
            self.cursor.skip_whitespace();
            match self.cursor.peek() {
                None => return Ok(()),
                Some(b',') => {
                    self.cursor.bump();
                    out.push(self.element()?);
                }
                Some(_) => return Err(self.cursor.error(ErrorKind::ExpectedComma)),
            }
        }
    }

    fn element(&mut self) -> Result<ForwardedElement> {
        let mut element = ForwardedElement::default();
        let mut seen: SmallVec<[&'a str; 4]> = SmallVec::new();

        self.cursor.skip_whitespace();
        if !self.cursor.peek().is_some_and(is_token_byte) {
            return Ok(element);
        }

        loop {
            if !seen.is_empty() {
                self.cursor.skip_whitespace();
                if !self.cursor.eat(b';') {
                    return Ok(element);
                }
            }

            let (key, value) = self.pair()?;
            if seen.iter().any(|k| k.eq_ignore_ascii_case(key)) {
                let key = SmolStr::new(key.to_ascii_lowercase());
                return Err(self.cursor.error(ErrorKind::DuplicateKey(key)));
            }
            seen.push(key);

            if key.eq_ignore_ascii_case(KEY_BY) {
                element.by_node = self.node(&value)?;
            } else if key.eq_ignore_ascii_case(KEY_FOR) {
                element.for_node = self.node(&value)?;
            } else if key.eq_ignore_ascii_case(KEY_HOST) {
                element.host = non_empty(value.to_lowercase());
            } else if key.eq_ignore_ascii_case(KEY_PROTO) {
                element.proto = normalize_proto(&value);
            }
        }
    }

    fn pair(&mut self) -> Result<(&'a str, Cow<'a, str>)> {
        let key = self.token()?;
        self.cursor.skip_whitespace();
        if !self.cursor.eat(b'=') {
            return Err(self.cursor.error(ErrorKind::ExpectedEquals));
        }
        let value = self.value()?;
        Ok((key, value))
    }

    fn value(&mut self) -> Result<Cow<'a, str>> {
        self.cursor.skip_whitespace();
        if self.cursor.peek() == Some(b'"') {
            return self.quoted_string();
        }
        self.token().map(Cow::Borrowed)
    }

    fn token(&mut self) -> Result<&'a str> {
        self.cursor.skip_whitespace();
        let token = self.cursor.take_while(is_token_byte);
        if token.is_empty() {
            return Err(self.cursor.error(ErrorKind::ExpectedToken));
        }
        Ok(token)
    }

    /// Borrows the quoted text when it holds no escapes.
    fn quoted_string(&mut self) -> Result<Cow<'a, str>> {
        self.cursor.skip_whitespace();
        if !self.cursor.eat(b'"') {
            return Err(self.cursor.error(ErrorKind::ExpectedQuote));
        }

        let input = self.cursor.input();
        let bytes = input.as_bytes();
        let mut unescaped: Option<String> = None;
        let mut segment = self.cursor.position();
        loop {
            let pos = self.cursor.position();
            let Some(rel) = memchr2(b'"', b'\\', &bytes[pos..]) else {
                self.cursor.seek(input.len());
                return Err(self.cursor.error(ErrorKind::UnterminatedQuotedString));
            };
            let idx = pos + rel;
            if bytes[idx] == b'"' {
                self.cursor.seek(idx + 1);
                let tail = &input[segment..idx];
                return Ok(match unescaped {
                    None => Cow::Borrowed(tail),
                    Some(mut buf) => {
                        buf.push_str(tail);
                        Cow::Owned(buf)
                    }
                });
            }

            // quoted-pair: keep the next byte literally
            if idx + 1 >= bytes.len() {
                self.cursor.seek(input.len());
                return Err(self.cursor.error(ErrorKind::UnterminatedQuotedString));
            }
            unescaped
                .get_or_insert_with(String::new)
                .push_str(&input[segment..idx]);
            segment = idx + 1;
            self.cursor.seek(skip_char(input, idx + 1));
        }
    }

    fn node(&self, value: &str) -> Result<Node> {
        parse_node(value).map_err(|kind| self.cursor.error(kind))
    }
}

/// Index just past the char starting at `idx`.
fn skip_char(input: &str, idx: usize) -> usize {
    input[idx..]
        .chars()
        .next()
        .map_or(input.len(), |ch| idx + ch.len_utf8())
}

fn non_empty(value: String) -> Option<SmolStr> {
    if value.is_empty() {
        None
    } else {
        Some(SmolStr::from(value))
    }
}

fn normalize_proto(value: &str) -> Option<SmolStr> {
    if value.eq_ignore_ascii_case("https") {
        Some(SmolStr::new_static("https"))
    } else if value.eq_ignore_ascii_case("http") {
        Some(SmolStr::new_static("http"))
    } else {
        non_empty(value.to_lowercase())
    }
}
