use thiserror::Error;

use crate::analyzer::ParseError;
use crate::partition::PartitionError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Parse error: {0}")]
    Parse(ParseError),
    #[error("Partition error: {0}")]
    Partition(#[from] PartitionError),
    #[error("Config error: {0}")]
    Config(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type InternalResult<T> = Result<T, Error>;

impl From<ParseError> for Error {
    /// Lifts rejections from the partition set and reader failures out of
    /// the parse error so they are reported under their own kind.
    fn from(error: ParseError) -> Self {
        match error {
            ParseError::Partition(e) => Error::Partition(e),
            ParseError::Io(e) => Error::Io(e),
            other => Error::Parse(other),
        }
    }
}

impl Error {
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Error::Internal(message.into())
    }
}
