use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufReader, path::Path};

use crate::{Error, InternalResult};

/// Validation policy applied by [`PartitionSet`](crate::partition::PartitionSet).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionConfig {
    /// Accept ranges whose selected sites are already owned by another range.
    #[serde(default = "default_false")]
    pub allow_overlap: bool,

    /// Require every alignment site to belong to some partition.
    #[serde(default = "default_false")]
    pub require_complete: bool,
}

impl Default for PartitionConfig {
    fn default() -> Self {
        Self {
            allow_overlap: default_false(),
            require_complete: default_false(),
        }
    }
}

impl PartitionConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> InternalResult<Self> {
        let file = File::open(path.as_ref()).map_err(|e| {
            Error::Config(format!(
                "failed to open {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader<R: std::io::Read>(reader: R) -> InternalResult<Self> {
        serde_json::from_reader(reader)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))
    }
}

fn default_false() -> bool {
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_for_missing_fields() {
        let config = PartitionConfig::from_reader("{}".as_bytes()).unwrap();
        assert_eq!(config, PartitionConfig::default());

        let config = PartitionConfig::from_reader(r#"{"allow_overlap": true}"#.as_bytes()).unwrap();
        assert!(config.allow_overlap);
        assert!(!config.require_complete);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"require_complete": true}}"#).unwrap();
        let config = PartitionConfig::from_file(file.path()).unwrap();
        assert!(config.require_complete);
    }

    #[test]
    fn test_invalid_config() {
        let result = PartitionConfig::from_reader("{ not json".as_bytes());
        assert!(matches!(result, Err(Error::Config(_))));

        let result = PartitionConfig::from_file("/nonexistent/partdef.json");
        assert!(matches!(result, Err(Error::Config(msg)) if msg.contains("failed to open")));
    }
}
