use thiserror::Error;

/// Rejections raised while registering ranges or validating a partition set.
///
/// Positions are stored zero-based and printed one-based.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PartitionError {
    #[error("partition `{partition}`: stride must be at least 1, found {modulo}")]
    InvalidModulo { partition: String, modulo: i64 },

    #[error(
        "partition `{partition}`: interval {}-{} lies outside the alignment of length {alignment_length}",
        .start + 1,
        .end + 1
    )]
    OutOfBounds {
        partition: String,
        start: i64,
        end: i64,
        alignment_length: usize,
    },

    #[error(
        "partition `{partition}`: interval start {} is greater than its end {}",
        .start + 1,
        .end + 1
    )]
    InvalidRange {
        partition: String,
        start: i64,
        end: i64,
    },

    #[error("partition `{partition}` is bound to model `{existing}`, cannot rebind it to `{requested}`")]
    ModelMismatch {
        partition: String,
        existing: String,
        requested: String,
    },

    #[error("partition `{partition}`: site {} is already assigned to partition `{existing}`", .site + 1)]
    Overlap {
        partition: String,
        site: usize,
        existing: String,
    },

    #[error("{unassigned} site(s) are not assigned to any partition, first unassigned site is {}", .first + 1)]
    Incomplete { unassigned: usize, first: usize },
}

pub type PartitionResult<T> = std::result::Result<T, PartitionError>;
