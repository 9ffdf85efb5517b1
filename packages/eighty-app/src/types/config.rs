//! Configuration for record finalization.

use serde::{Deserialize, Serialize};

use crate::links::flag::FLAG_PARAMETER;

/// Configuration for [`RecordFinalizer`](crate::finalize::RecordFinalizer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinalizeConfig {
    /// Query parameter stripped from every source URL.
    ///
    /// Default: `80flag`.
    pub flag_parameter: String,

    /// Migrate legacy field shapes (`description`, scalar `upc`,
    /// unattributed review lists, ...) into value record lists.
    ///
    /// Default: true.
    pub map_legacy_fields: bool,

    /// Remove duplicate entries from every list field of a record.
    ///
    /// Default: true.
    pub deduplicate: bool,

    /// Write `dateCrawled` on every finalized record.
    ///
    /// Default: true.
    pub stamp_date_crawled: bool,
}

impl Default for FinalizeConfig {
    fn default() -> Self {
        Self {
            flag_parameter: FLAG_PARAMETER.to_string(),
            map_legacy_fields: true,
            deduplicate: true,
            stamp_date_crawled: true,
        }
    }
}

impl FinalizeConfig {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the stripped flag parameter.
    pub fn with_flag_parameter(mut self, parameter: impl Into<String>) -> Self {
        self.flag_parameter = parameter.into();
        self
    }

    /// Enable or disable legacy field migration.
    pub fn with_legacy_fields(mut self, enabled: bool) -> Self {
        self.map_legacy_fields = enabled;
        self
    }

    /// Enable or disable list de-duplication.
    pub fn with_deduplication(mut self, enabled: bool) -> Self {
        self.deduplicate = enabled;
        self
    }

    /// Enable or disable the `dateCrawled` stamp.
    pub fn with_date_crawled(mut self, enabled: bool) -> Self {
        self.stamp_date_crawled = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FinalizeConfig::default();
        assert_eq!(config.flag_parameter, "80flag");
        assert!(config.map_legacy_fields);
        assert!(config.deduplicate);
        assert!(config.stamp_date_crawled);
    }

    #[test]
    fn test_builders() {
        let config = FinalizeConfig::new()
            .with_flag_parameter("state")
            .with_legacy_fields(false)
            .with_deduplication(false)
            .with_date_crawled(false);

        assert_eq!(config.flag_parameter, "state");
        assert!(!config.map_legacy_fields);
        assert!(!config.deduplicate);
        assert!(!config.stamp_date_crawled);
    }

    #[test]
    fn test_partial_deserialize_uses_defaults() {
        let config: FinalizeConfig = serde_json::from_str(r#"{"deduplicate": false}"#).unwrap();
        assert!(!config.deduplicate);
        assert_eq!(config.flag_parameter, "80flag");
        assert!(config.map_legacy_fields);
    }
}
