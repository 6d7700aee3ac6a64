use std::fmt::{self, Write as _};
use std::io::Write as _;

/// Sink for encoder output: `String` for `Display`/`to_string`, `Vec<u8>` for
/// byte-oriented callers.
pub(crate) trait TextBuffer {
    fn push_str(&mut self, s: &str);
    fn push_byte(&mut self, byte: u8);
    fn push_display(&mut self, value: impl fmt::Display);
}

impl TextBuffer for String {
    fn push_str(&mut self, s: &str) {
        self.push_str(s);
    }

    // Callers only push ASCII through this path.
    fn push_byte(&mut self, byte: u8) {
        debug_assert!(byte.is_ascii());
        self.push(byte as char);
    }

    fn push_display(&mut self, value: impl fmt::Display) {
        // writing into a String cannot fail
        let _ = write!(self, "{value}");
    }
}

impl TextBuffer for Vec<u8> {
    fn push_str(&mut self, s: &str) {
        self.extend_from_slice(s.as_bytes());
    }

    fn push_byte(&mut self, byte: u8) {
        self.push(byte);
    }

    fn push_display(&mut self, value: impl fmt::Display) {
        let _ = write!(self, "{value}");
    }
}
