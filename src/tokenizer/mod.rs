//! # Tokenizer Component
//!
//! Lexical analysis of partition definitions: raw bytes in, [`Token`](token::Token)s out.
//!
//! ## Design Principles
//!
//! * **Streaming**: the [`Scanner`](scanner::Scanner) pulls one character at a
//!   time from a buffered reader and emits one token per call.
//! * **No lexical errors**: anything unexpected becomes an ordinary token and is
//!   rejected later by the parser with a grammar error.
//! * **Two-phase numbers**: words are scanned with a single delimiter set and
//!   classified as decimal or identifier afterwards.
//!
//! ## Component Structure
//!
//! * [`token`]: token kinds and reserved character classes
//! * [`scanner`]: the character-level state machine
//!
//! ## Usage Example
//!
//! ```rust
//! use partdef::tokenizer::{scanner::Scanner, token::TokenKind};
//!
//! let mut scanner = Scanner::new("GTR, p1 = 1-10".as_bytes());
//! assert_eq!(scanner.scan().unwrap().kind, TokenKind::Identifier);
//! assert_eq!(scanner.scan().unwrap().kind, TokenKind::Separator);
//! ```

pub mod scanner;
pub mod token;
