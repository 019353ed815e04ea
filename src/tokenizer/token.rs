//! # Token Model
//!
//! The closed set of token kinds produced by the [`Scanner`](super::scanner::Scanner)
//! and the reserved characters that delimit them.
//!
//! ## Character Classes
//!
//! | Character        | Token                      |
//! |------------------|----------------------------|
//! | `,`              | [`TokenKind::Separator`]   |
//! | `=`              | [`TokenKind::Equal`]       |
//! | `-`              | [`TokenKind::Range`]       |
//! | `/`              | [`TokenKind::Modulo`]      |
//! | `\n`, `\r`, `\r\n` | [`TokenKind::EndOfLine`] |
//! | space            | skipped                    |
//!
//! Everything else is accumulated into an identifier run, which is classified
//! as [`TokenKind::Decimal`] when it parses as a base-10 integer.

use std::fmt;

use strum_macros::{AsRefStr, Display, EnumIter};

pub const SEPARATOR: char = ',';
pub const EQUAL: char = '=';
pub const RANGE: char = '-';
pub const MODULO: char = '/';
pub const SPACE: char = ' ';
pub const LINE_FEED: char = '\n';
pub const CARRIAGE_RETURN: char = '\r';

/// Lexical category of a [`Token`].
///
/// The `Display` form is the human readable name used in parse errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumIter)]
pub enum TokenKind {
    #[strum(serialize = "identifier")]
    Identifier,
    #[strum(serialize = "separator")]
    Separator,
    #[strum(serialize = "assignment")]
    Equal,
    #[strum(serialize = "range")]
    Range,
    #[strum(serialize = "modulo")]
    Modulo,
    #[strum(serialize = "decimal")]
    Decimal,
    #[strum(serialize = "end of line")]
    EndOfLine,
    #[strum(serialize = "end of input")]
    EndOfInput,
    #[strum(serialize = "illegal input")]
    Illegal,
}

impl TokenKind {
    /// Kind of a single-character token, if `c` is one.
    pub fn from_punctuation(c: char) -> Option<Self> {
        match c {
            SEPARATOR => Some(TokenKind::Separator),
            EQUAL => Some(TokenKind::Equal),
            RANGE => Some(TokenKind::Range),
            MODULO => Some(TokenKind::Modulo),
            _ => None,
        }
    }
}

/// A scanned token: its kind and the literal text it was built from.
///
/// Punctuation, line ends and end of input carry an empty literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Self {
            kind,
            literal: literal.into(),
        }
    }

    pub fn punctuation(kind: TokenKind) -> Self {
        Self::new(kind, String::new())
    }

    pub fn end_of_line() -> Self {
        Self::punctuation(TokenKind::EndOfLine)
    }

    pub fn end_of_input() -> Self {
        Self::punctuation(TokenKind::EndOfInput)
    }

    /// Classifies a completed identifier run.
    pub fn from_word(word: String) -> Self {
        let kind = if parse_decimal(&word).is_some() {
            TokenKind::Decimal
        } else {
            TokenKind::Identifier
        };
        Self::new(kind, word)
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// Numeric value of a `Decimal` token.
    pub fn decimal_value(&self) -> Option<i64> {
        match self.kind {
            TokenKind::Decimal => parse_decimal(&self.literal),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.literal.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{} `{}`", self.kind, self.literal)
        }
    }
}

/// Characters that end an identifier run besides line ends and end of input.
pub fn is_reserved(c: char) -> bool {
    matches!(c, SEPARATOR | EQUAL | RANGE | MODULO | SPACE)
}

pub fn is_line_end(c: char) -> bool {
    c == LINE_FEED || c == CARRIAGE_RETURN
}

/// Base-10 integer value of `literal`, shared by the scanner's classification
/// and the parser's conversion so both always agree.
pub fn parse_decimal(literal: &str) -> Option<i64> {
    literal.parse::<i64>().ok()
}
