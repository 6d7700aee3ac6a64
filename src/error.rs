use std::net::AddrParseError;

use smol_str::SmolStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Syntax,
    Address,
    Validation,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErrorKind {
    #[error("expected token")]
    ExpectedToken,
    #[error("expected '\"'")]
    ExpectedQuote,
    #[error("expected '='")]
    ExpectedEquals,
    #[error("expected ','")]
    ExpectedComma,
    #[error("unexpected end of quoted-string")]
    UnterminatedQuotedString,
    #[error("duplicate key {0:?}")]
    DuplicateKey(SmolStr),
    #[error("invalid address: {0}")]
    InvalidAddress(#[source] AddrParseError),
    #[error("unexpected zone identifier")]
    ZoneIdentifier,
    #[error("missing ']' in address")]
    MissingBracket,
    #[error("unexpected characters after ']' in address")]
    TrailingAfterBracket,
    #[error("unexpected ':' in address")]
    UnexpectedColon,
    #[error("invalid obfuscated node")]
    InvalidObfuscatedNode,
    #[error("invalid obfuscated port")]
    InvalidObfuscatedPort,
    #[error("invalid port")]
    InvalidPort,
}

impl ErrorKind {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ErrorKind::ExpectedToken
            | ErrorKind::ExpectedQuote
            | ErrorKind::ExpectedEquals
            | ErrorKind::ExpectedComma
            | ErrorKind::UnterminatedQuotedString
            | ErrorKind::DuplicateKey(_) => ErrorCategory::Syntax,
            ErrorKind::InvalidAddress(_)
            | ErrorKind::ZoneIdentifier
            | ErrorKind::MissingBracket
            | ErrorKind::TrailingAfterBracket
            | ErrorKind::UnexpectedColon => ErrorCategory::Address,
            ErrorKind::InvalidObfuscatedNode
            | ErrorKind::InvalidObfuscatedPort
            | ErrorKind::InvalidPort => ErrorCategory::Validation,
        }
    }
}

impl From<AddrParseError> for ErrorKind {
    fn from(err: AddrParseError) -> Self {
        ErrorKind::InvalidAddress(err)
    }
}

/// Where a decode error was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Location {
    /// Index of the header occurrence in the input sequence, 0-based.
    pub line: usize,
    /// Byte offset within that occurrence.
    pub offset: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("forwarded: {kind} at {} in {}", .location.offset, .location.line)]
pub struct Error {
    pub kind: ErrorKind,
    pub location: Location,
}

impl Error {
    pub fn new(kind: ErrorKind, line: usize, offset: usize) -> Self {
        Self {
            kind,
            location: Location { line, offset },
        }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn category(&self) -> ErrorCategory {
        self.kind.category()
    }

    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    pub fn line(&self) -> usize {
        self.location.line
    }

    pub fn offset(&self) -> usize {
        self.location.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::net::IpAddr;

    #[rstest::rstest]
    fn test_display_includes_position() {
        let err = Error::new(ErrorKind::ExpectedComma, 1, 14);
        assert_eq!(err.to_string(), "forwarded: expected ',' at 14 in 1");
        assert_eq!(err.message(), "expected ','");
        assert_eq!(err.line(), 1);
        assert_eq!(err.offset(), 14);
    }

    #[rstest::rstest]
    fn test_address_error_keeps_source() {
        let parse_err = "192.0.2.256".parse::<IpAddr>().unwrap_err();
        let kind = ErrorKind::from(parse_err.clone());
        assert_eq!(kind.category(), ErrorCategory::Address);
        assert_eq!(kind.to_string(), format!("invalid address: {parse_err}"));
        assert!(kind.source().is_some());
    }

    #[rstest::rstest]
    fn test_categories() {
        assert_eq!(
            ErrorKind::DuplicateKey("for".into()).category(),
            ErrorCategory::Syntax
        );
        assert_eq!(ErrorKind::ZoneIdentifier.category(), ErrorCategory::Address);
        assert_eq!(
            ErrorKind::InvalidPort.category(),
            ErrorCategory::Validation
        );
    }
}
