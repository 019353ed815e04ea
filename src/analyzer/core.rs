use std::io;

use thiserror::Error;

use crate::partition::PartitionError;
use crate::tokenizer::token::Token;

pub type ParseResult<T> = Result<T, ParseError>;

/// First failure of a parse.
///
/// Grammar variants carry the 1-based line and the offending token.
/// Rejections from the partition set are passed through untouched.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("line {line}: partition definitions must start with a model name, found {found}")]
    MissingModelName { line: usize, found: Token },

    #[error("line {line}: expected a model name, found {found}")]
    ExpectedModelName { line: usize, found: Token },

    #[error("line {line}: model name must be followed by a separator, found {found}")]
    ExpectedModelSeparator { line: usize, found: Token },

    #[error("line {line}: expected a partition name after the model separator, found {found}")]
    ExpectedPartitionName { line: usize, found: Token },

    #[error("line {line}: partition name must be followed by `=`, found {found}")]
    ExpectedAssignment { line: usize, found: Token },

    #[error("line {line}: interval must start with a decimal number, found {found}")]
    ExpectedIntervalStart { line: usize, found: Token },

    #[error("line {line}: interval end must be a decimal number, found {found}")]
    ExpectedIntervalEnd { line: usize, found: Token },

    #[error("line {line}: interval stride must be a decimal number, found {found}")]
    ExpectedIntervalModulo { line: usize, found: Token },

    #[error("line {line}: expected separator, end of line, or end of input after interval, found {found}")]
    ExpectedIntervalTerminator { line: usize, found: Token },

    #[error(transparent)]
    Partition(#[from] PartitionError),

    #[error("failed to read partition definitions: {0}")]
    Io(#[from] io::Error),
}

impl ParseError {
    /// Line of a grammar error; `None` for delegated and I/O errors.
    pub fn line(&self) -> Option<usize> {
        match self {
            ParseError::MissingModelName { line, .. }
            | ParseError::ExpectedModelName { line, .. }
            | ParseError::ExpectedModelSeparator { line, .. }
            | ParseError::ExpectedPartitionName { line, .. }
            | ParseError::ExpectedAssignment { line, .. }
            | ParseError::ExpectedIntervalStart { line, .. }
            | ParseError::ExpectedIntervalEnd { line, .. }
            | ParseError::ExpectedIntervalModulo { line, .. }
            | ParseError::ExpectedIntervalTerminator { line, .. } => Some(*line),
            ParseError::Partition(_) | ParseError::Io(_) => None,
        }
    }

    /// Offending token of a grammar error.
    pub fn found(&self) -> Option<&Token> {
        match self {
            ParseError::MissingModelName { found, .. }
            | ParseError::ExpectedModelName { found, .. }
            | ParseError::ExpectedModelSeparator { found, .. }
            | ParseError::ExpectedPartitionName { found, .. }
            | ParseError::ExpectedAssignment { found, .. }
            | ParseError::ExpectedIntervalStart { found, .. }
            | ParseError::ExpectedIntervalEnd { found, .. }
            | ParseError::ExpectedIntervalModulo { found, .. }
            | ParseError::ExpectedIntervalTerminator { found, .. } => Some(found),
            ParseError::Partition(_) | ParseError::Io(_) => None,
        }
    }

    pub fn is_grammar(&self) -> bool {
        self.line().is_some()
    }
}
