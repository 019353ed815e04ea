
use crate::partition::{PartitionResult, PartitionSetBuilder};

/// `(partition, model, start, end, modulo)` as received by the builder.
pub type Registration = (String, String, i64, i64, i64);

/// Builder that accepts everything and remembers the calls.
#[derive(Debug, Default)]
pub struct RecordingBuilder {
    pub calls: Vec<Registration>,
}

impl PartitionSetBuilder for RecordingBuilder {
    fn add_range(
        &mut self,
        partition: &str,
        model: &str,
        start: i64,
        end: i64,
        modulo: i64,
    ) -> PartitionResult<()> {
        self.calls
            .push((partition.to_string(), model.to_string(), start, end, modulo));
        Ok(())
    }
}

pub fn registration(partition: &str, model: &str, start: i64, end: i64, modulo: i64) -> Registration {
    (partition.to_string(), model.to_string(), start, end, modulo)
}
