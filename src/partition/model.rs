use std::fmt;

use serde::Serialize;

use crate::formatter::Formatter;

/// A validated, zero-based inclusive span of sites selected with a stride.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SiteRange {
    start: usize,
    end: usize,
    modulo: usize,
}

impl SiteRange {
    /// Callers guarantee `start <= end` and `modulo >= 1`.
    pub(crate) fn new(start: usize, end: usize, modulo: usize) -> Self {
        debug_assert!(start <= end && modulo >= 1);
        Self { start, end, modulo }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn modulo(&self) -> usize {
        self.modulo
    }

    /// Selected sites: `start`, `start + modulo`, ... up to `end`.
    pub fn sites(&self) -> impl Iterator<Item = usize> {
        (self.start..=self.end).step_by(self.modulo)
    }

    pub fn site_count(&self) -> usize {
        (self.end - self.start) / self.modulo + 1
    }

    pub fn contains(&self, site: usize) -> bool {
        site >= self.start && site <= self.end && (site - self.start) % self.modulo == 0
    }
}

impl fmt::Display for SiteRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Formatter::default().format_range(self))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Partition {
    pub name: String,
    pub model: String,
    pub ranges: Vec<SiteRange>,
}

impl Partition {
    pub(crate) fn new(name: &str, model: &str) -> Self {
        Self {
            name: name.to_string(),
            model: model.to_string(),
            ranges: Vec::new(),
        }
    }

    /// All selected sites, range by range in registration order.
    pub fn sites(&self) -> impl Iterator<Item = usize> + '_ {
        self.ranges.iter().flat_map(SiteRange::sites)
    }

    pub fn site_count(&self) -> usize {
        self.ranges.iter().map(SiteRange::site_count).sum()
    }

    pub fn contains(&self, site: usize) -> bool {
        self.ranges.iter().any(|r| r.contains(site))
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Formatter::default().format_partition(self))
    }
}
