//! # partdef: alignment partition definitions
//!
//! Parses the small line-oriented language that groups the sites of a
//! multiple sequence alignment into named partitions, each bound to a model:
//!
//! ```text
//! GTR, gene1 = 1-100
//! HKY, gene2 = 101-200/3,250-300
//! ```
//!
//! ## Processing Pipeline
//!
//! ```text
//! bytes → Scanner → Parser → PartitionSetBuilder::add_range → PartitionSet
//! ```
//!
//! * [`tokenizer`]: character scanning into tokens
//! * [`analyzer`]: the grammar, one lookahead token, fail-fast errors
//! * [`partition`]: the builder capability and the validating [`PartitionSet`]
//! * [`formatter`]: canonical text and reports
//! * [`config`]: JSON-loaded validation policy
//!
//! ```rust
//! use partdef::{parse_partitions, PartitionSet};
//!
//! let input = "GTR, gene1 = 1-100\nHKY, gene2 = 101-200/3,250-300\n";
//! let set: PartitionSet = parse_partitions(input.as_bytes(), 300).unwrap();
//! assert_eq!(set.models(), vec!["GTR", "HKY"]);
//! ```

pub mod analyzer;
pub mod config;
pub mod error;
pub mod formatter;
pub mod partition;
pub mod tokenizer;

// Re-exports
pub use analyzer::{parse_partitions, ParseError, ParseResult, Parser};
pub use config::PartitionConfig;
pub use error::*;
pub use partition::{Partition, PartitionError, PartitionSet, PartitionSetBuilder, SiteRange};
