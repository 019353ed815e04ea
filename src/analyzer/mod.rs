pub mod core;
pub mod parser;

#[cfg(test)]
mod tests;

pub use self::core::ParseError;
pub use self::core::ParseResult;
pub use parser::{parse_partitions, Parser, RangeSpec};
