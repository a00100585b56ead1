//! Resolver configuration.
//!
//! Configuration is plain serde data so it can live in a caller's own config
//! file. [`ResolverConfig::from_toml_str`] parses a standalone TOML table:
//!
//! ```toml
//! duplicate_ids = "reject"
//! analyze_stalls = false
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// What to do when a task list contains the same identifier more than once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Accept the list. Resolution and blocking are keyed by identifier, so a
    /// repeated id is only ever resolved once and the list never resolves
    /// completely.
    #[default]
    Tolerate,
    /// Refuse the list with [`Error::DuplicateTaskId`].
    Reject,
}

/// Configuration for a [`Resolver`](crate::Resolver).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResolverConfig {
    /// Handling of repeated task identifiers.
    pub duplicate_ids: DuplicatePolicy,
    /// Classify stalled resolutions into cycles and unknown dependencies.
    pub analyze_stalls: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            duplicate_ids: DuplicatePolicy::Tolerate,
            analyze_stalls: true,
        }
    }
}

impl ResolverConfig {
    /// Parse configuration from a TOML string.
    ///
    /// Missing keys take their default values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the input is not valid TOML or contains
    /// unknown keys or values.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        toml::from_str(input).map_err(|e| Error::config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ResolverConfig::default();
        assert_eq!(config.duplicate_ids, DuplicatePolicy::Tolerate);
        assert!(config.analyze_stalls);
    }

    #[test]
    fn test_parse_empty_toml_uses_defaults() {
        let config = ResolverConfig::from_toml_str("").unwrap();
        assert_eq!(config, ResolverConfig::default());
    }

    #[test]
    fn test_parse_full_toml() {
        let config = ResolverConfig::from_toml_str(
            r#"
            duplicate_ids = "reject"
            analyze_stalls = false
            "#,
        )
        .unwrap();
        assert_eq!(config.duplicate_ids, DuplicatePolicy::Reject);
        assert!(!config.analyze_stalls);
    }

    #[test]
    fn test_parse_unknown_key_fails() {
        let err = ResolverConfig::from_toml_str("max_rounds = 3").unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_parse_unknown_policy_fails() {
        let err = ResolverConfig::from_toml_str(r#"duplicate_ids = "merge""#).unwrap_err();
        assert!(err.to_string().starts_with("Configuration error:"));
    }
}
