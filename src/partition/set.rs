use std::collections::HashMap;

use serde::Serialize;

use super::{
    error::{PartitionError, PartitionResult},
    model::{Partition, SiteRange},
    PartitionSetBuilder,
};
use crate::config::PartitionConfig;

/// All partitions of one alignment of known length.
///
/// Partitions keep the order in which their first range was registered.
/// Every site remembers the partition that selected it first, which is what
/// overlap detection and [`partition_of_site`](Self::partition_of_site) use.
#[derive(Debug, Clone, Serialize)]
pub struct PartitionSet {
    alignment_length: usize,
    partitions: Vec<Partition>,
    #[serde(skip)]
    index: HashMap<String, usize>,
    // grows to the highest registered site, not to the alignment length
    #[serde(skip)]
    owners: Vec<Option<usize>>,
    #[serde(skip)]
    config: PartitionConfig,
}

impl PartitionSet {
    pub fn new(alignment_length: usize) -> Self {
        Self::with_config(alignment_length, PartitionConfig::default())
    }

    pub fn with_config(alignment_length: usize, config: PartitionConfig) -> Self {
        Self {
            alignment_length,
            partitions: Vec::new(),
            index: HashMap::new(),
            owners: Vec::new(),
            config,
        }
    }

    pub fn alignment_length(&self) -> usize {
        self.alignment_length
    }

    pub fn config(&self) -> &PartitionConfig {
        &self.config
    }

    /// Number of partitions.
    pub fn len(&self) -> usize {
        self.partitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.partitions.is_empty()
    }

    pub fn partitions(&self) -> &[Partition] {
        &self.partitions
    }

    pub fn get(&self, name: &str) -> Option<&Partition> {
        self.index.get(name).map(|&i| &self.partitions[i])
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.partitions.iter().map(|p| p.name.as_str())
    }

    /// Distinct model names in first-seen order.
    pub fn models(&self) -> Vec<&str> {
        let mut models: Vec<&str> = Vec::new();
        for partition in &self.partitions {
            if !models.contains(&partition.model.as_str()) {
                models.push(&partition.model);
            }
        }
        models
    }

    pub fn partition_of_site(&self, site: usize) -> Option<&Partition> {
        self.owner(site).map(|i| &self.partitions[i])
    }

    pub fn unassigned_sites(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.alignment_length).filter(|&site| self.owner(site).is_none())
    }

    pub fn is_complete(&self) -> bool {
        self.unassigned_sites().next().is_none()
    }

    fn owner(&self, site: usize) -> Option<usize> {
        self.owners.get(site).copied().flatten()
    }

    /// Applies the set-wide policies that cannot be decided per range.
    pub fn validate(&self) -> PartitionResult<()> {
        if self.config.require_complete {
            let mut unassigned = self.unassigned_sites();
            if let Some(first) = unassigned.next() {
                return Err(PartitionError::Incomplete {
                    unassigned: unassigned.count() + 1,
                    first,
                });
            }
        }
        Ok(())
    }

    fn check_range(
        &self,
        partition: &str,
        model: &str,
        start: i64,
        end: i64,
        modulo: i64,
    ) -> PartitionResult<SiteRange> {
        if modulo < 1 {
            return Err(PartitionError::InvalidModulo {
                partition: partition.to_string(),
                modulo,
            });
        }
        let in_bounds = |v: i64| usize::try_from(v).ok().filter(|&v| v < self.alignment_length);
        let (Some(first), Some(last)) = (in_bounds(start), in_bounds(end)) else {
            return Err(PartitionError::OutOfBounds {
                partition: partition.to_string(),
                start,
                end,
                alignment_length: self.alignment_length,
            });
        };
        if first > last {
            return Err(PartitionError::InvalidRange {
                partition: partition.to_string(),
                start,
                end,
            });
        }
        if let Some(existing) = self.get(partition) {
            if existing.model != model {
                return Err(PartitionError::ModelMismatch {
                    partition: partition.to_string(),
                    existing: existing.model.clone(),
                    requested: model.to_string(),
                });
            }
        }

        // modulo >= 1 was checked above
        let range = SiteRange::new(first, last, modulo as usize);
        if !self.config.allow_overlap {
            let taken = range
                .sites()
                .find_map(|site| self.owner(site).map(|owner| (site, owner)));
            if let Some((site, owner)) = taken {
                return Err(PartitionError::Overlap {
                    partition: partition.to_string(),
                    site,
                    existing: self.partitions[owner].name.clone(),
                });
            }
        }
        Ok(range)
    }
}

impl PartitionSetBuilder for PartitionSet {
    fn add_range(
        &mut self,
        partition: &str,
        model: &str,
        start: i64,
        end: i64,
        modulo: i64,
    ) -> PartitionResult<()> {
        let range = self.check_range(partition, model, start, end, modulo)?;

        let slot = match self.index.get(partition) {
            Some(&slot) => slot,
            None => {
                self.partitions.push(Partition::new(partition, model));
                let slot = self.partitions.len() - 1;
                self.index.insert(partition.to_string(), slot);
                slot
            }
        };
        if self.owners.len() <= range.end() {
            self.owners.resize(range.end() + 1, None);
        }
        for site in range.sites() {
            self.owners[site].get_or_insert(slot);
        }
        self.partitions[slot].ranges.push(range);

        tracing::trace!(partition, model, %range, "range registered");
        Ok(())
    }
}
