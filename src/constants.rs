pub const KEY_BY: &str = "by";
pub const KEY_FOR: &str = "for";
pub const KEY_HOST: &str = "host";
pub const KEY_PROTO: &str = "proto";

pub const UNKNOWN: &str = "unknown";

/// Rendering of an element with no directives set.
pub const EMPTY_ELEMENT: &str = "for=unknown";

const OBFUSCATED_EXTRA: &[u8] = b"-._";
const TOKEN_EXTRA: &[u8] = b"!#$%&'*+-.^_`|~";

const fn build_table(extra: &[u8]) -> [bool; 256] {
    let mut table = [false; 256];
    let mut byte = 0;
    while byte < 256 {
        let b = byte as u8;
        table[byte] = b.is_ascii_alphanumeric();
        byte += 1;
    }
    let mut idx = 0;
    while idx < extra.len() {
        table[extra[idx] as usize] = true;
        idx += 1;
    }
    table
}

/// RFC 7230 `tchar`.
static TOKEN_CHARS: [bool; 256] = build_table(TOKEN_EXTRA);

/// RFC 7239 `obfnode`/`obfport` characters (ALPHA / DIGIT / "." / "_" / "-").
static OBFUSCATED_CHARS: [bool; 256] = build_table(OBFUSCATED_EXTRA);

#[inline]
pub fn is_token_byte(byte: u8) -> bool {
    TOKEN_CHARS[byte as usize]
}

#[inline]
pub fn is_obfuscated_byte(byte: u8) -> bool {
    OBFUSCATED_CHARS[byte as usize]
}

/// True when every byte is a `tchar`. The empty string is vacuously a token.
#[inline]
pub fn is_token(s: &str) -> bool {
    s.bytes().all(is_token_byte)
}

#[inline]
pub fn is_obfuscated(s: &str) -> bool {
    s.bytes().all(is_obfuscated_byte)
}
