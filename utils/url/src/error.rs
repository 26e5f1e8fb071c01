//! Error types for URL parsing.

use core::fmt;

/// Error type returned when a search endpoint URL cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    kind: ParseErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ParseErrorKind {
    /// The URL string is empty
    Empty,
    /// The URL contains whitespace or an ASCII control character
    InvalidCharacter { position: usize, found: char },
}

impl ParseError {
    /// Creates a new `ParseError` for empty URL strings.
    pub(crate) const fn empty() -> Self {
        Self {
            kind: ParseErrorKind::Empty,
        }
    }

    pub(crate) const fn invalid_character(position: usize, found: char) -> Self {
        Self {
            kind: ParseErrorKind::InvalidCharacter { position, found },
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ParseErrorKind::Empty => write!(f, "URL string is empty"),
            ParseErrorKind::InvalidCharacter { position, found } => {
                write!(f, "invalid character {found:?} at byte {position}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}
