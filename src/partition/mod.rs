//! # Partition Sets
//!
//! The accumulator the parser writes into. The parser only knows the
//! [`PartitionSetBuilder`] capability; [`PartitionSet`] is the implementation
//! that validates and records every range.

pub mod error;
pub mod model;
pub mod set;

pub use error::{PartitionError, PartitionResult};
pub use model::{Partition, SiteRange};
pub use set::PartitionSet;

use mockall::automock;

/// Registration side of a partition set.
#[automock]
pub trait PartitionSetBuilder {
    /// Records the zero-based inclusive interval `start..=end`, selecting every
    /// `modulo`-th site, for `partition` bound to `model`.
    ///
    /// Bounds, ordering, stride and conflicts are checked here and nowhere
    /// else; the values arrive exactly as written minus one.
    fn add_range(
        &mut self,
        partition: &str,
        model: &str,
        start: i64,
        end: i64,
        modulo: i64,
    ) -> PartitionResult<()>;
}
