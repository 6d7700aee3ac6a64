use crate::constants::{is_obfuscated_byte, is_token};
use crate::text::buffer::TextBuffer;

/// A value must be quoted unless it is a non-empty token.
pub fn needs_quoting(value: &str) -> bool {
    value.is_empty() || !is_token(value)
}

/// Writes `value` as a quoted-string, escaping `"` and `\`.
pub(crate) fn write_quoted_into<B: TextBuffer>(out: &mut B, value: &str) {
    out.push_byte(b'"');
    escape_quoted_into(out, value);
    out.push_byte(b'"');
}

/// Escapes `"` and `\`. CR and LF cannot be carried by a quoted-string and
/// become spaces, so the output stays on one line.
pub(crate) fn escape_quoted_into<B: TextBuffer>(out: &mut B, value: &str) {
    let mut start = 0;
    for (idx, byte) in value.bytes().enumerate() {
        let replacement = match byte {
            b'"' | b'\\' => None,
            b'\r' | b'\n' => Some(b' '),
            _ => continue,
        };
        if start < idx {
            out.push_str(&value[start..idx]);
        }
        match replacement {
            None => {
                out.push_byte(b'\\');
                start = idx;
            }
            Some(byte) => {
                out.push_byte(byte);
                start = idx + 1;
            }
        }
    }
    if start < value.len() {
        out.push_str(&value[start..]);
    }
}

/// Writes an obfuscated identifier or port, forcing the leading `_` and
/// replacing every byte outside the obfuscated set with `_`.
pub(crate) fn sanitize_obfuscated_into<B: TextBuffer>(out: &mut B, value: &str) {
    if !value.starts_with('_') {
        out.push_byte(b'_');
    }
    for byte in value.bytes() {
        if is_obfuscated_byte(byte) {
            out.push_byte(byte);
        } else {
            out.push_byte(b'_');
        }
    }
}
