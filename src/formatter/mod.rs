//! Rendering of partition sets back into definition text and into the
//! per-partition report printed by the command line tool.

pub mod config;

use config::FormatterConfig;

use crate::partition::{Partition, PartitionSet, SiteRange};

#[derive(Debug, Clone, Default)]
pub struct Formatter {
    config: FormatterConfig,
}

impl Formatter {
    pub fn new(config: FormatterConfig) -> Self {
        Self { config }
    }

    /// Canonical definition text; parsing it again yields an equivalent set.
    pub fn format(&self, set: &PartitionSet) -> String {
        set.partitions()
            .iter()
            .map(|p| self.format_partition(p) + &self.config.line_ending)
            .collect()
    }

    pub fn format_partition(&self, partition: &Partition) -> String {
        let (separator, assignment) = if self.config.separator_spacing {
            (", ", " = ")
        } else {
            (",", "=")
        };
        let ranges: Vec<String> = partition
            .ranges
            .iter()
            .map(|r| self.format_range(r))
            .collect();
        format!(
            "{}{}{}{}{}",
            partition.model,
            separator,
            partition.name,
            assignment,
            ranges.join(separator)
        )
    }

    /// One-based `a`, `a-b`, `a/n` or `a-b/n`.
    pub fn format_range(&self, range: &SiteRange) -> String {
        let mut text = (range.start() + 1).to_string();
        if range.end() != range.start() {
            text.push_str(&format!("-{}", range.end() + 1));
        }
        if range.modulo() != 1 {
            text.push_str(&format!("/{}", range.modulo()));
        }
        text
    }

    /// Aligned report: one row per partition with model, site count and ranges.
    pub fn summary(&self, set: &PartitionSet) -> String {
        let name_width = set.names().map(str::len).max().unwrap_or(0).max(4);
        let model_width = set.models().iter().map(|m| m.len()).max().unwrap_or(0).max(5);
        let assigned = set.alignment_length() - set.unassigned_sites().count();

        let mut out = format!(
            "{} partition(s), {} of {} site(s) assigned{}",
            set.len(),
            assigned,
            set.alignment_length(),
            self.config.line_ending
        );
        out.push_str(&format!(
            "{:<name_width$}  {:<model_width$}  {:>7}  ranges{}",
            "name", "model", "sites", self.config.line_ending
        ));
        for partition in set.partitions() {
            let ranges: Vec<String> = partition
                .ranges
                .iter()
                .map(|r| self.format_range(r))
                .collect();
            out.push_str(&format!(
                "{:<name_width$}  {:<model_width$}  {:>7}  {}{}",
                partition.name,
                partition.model,
                partition.site_count(),
                ranges.join(","),
                self.config.line_ending
            ));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::parse_partitions;
    use pretty_assertions::assert_eq;

    fn sample() -> PartitionSet {
        parse_partitions(
            "GTR, gene1 = 1-100\nHKY, gene2 = 101-200/3,250-300, 301\n".as_bytes(),
            301,
        )
        .unwrap()
    }

    #[test]
    fn test_canonical_format() {
        let text = Formatter::default().format(&sample());
        assert_eq!(
            text,
            "GTR, gene1 = 1-100\nHKY, gene2 = 101-200/3, 250-300, 301\n"
        );
    }

    #[test]
    fn test_compact_format() {
        let formatter = Formatter::new(FormatterConfig {
            separator_spacing: false,
            line_ending: "\r\n".to_string(),
        });
        assert_eq!(
            formatter.format(&sample()),
            "GTR,gene1=1-100\r\nHKY,gene2=101-200/3,250-300,301\r\n"
        );
    }

    #[test]
    fn test_format_reparses_to_same_set() {
        let set = sample();
        let text = Formatter::default().format(&set);
        let again = parse_partitions(text.as_bytes(), set.alignment_length()).unwrap();
        assert_eq!(again.partitions(), set.partitions());
    }

    #[test]
    fn test_summary() {
        let summary = Formatter::default().summary(&sample());
        let lines: Vec<&str> = summary.lines().collect();
        assert_eq!(lines[0], "2 partition(s), 186 of 301 site(s) assigned");
        assert_eq!(lines[1], "name   model    sites  ranges");
        assert_eq!(lines[2], "gene1  GTR        100  1-100");
        assert_eq!(lines[3], "gene2  HKY         86  101-200/3,250-300,301");
    }
}
