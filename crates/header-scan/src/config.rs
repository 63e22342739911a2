// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Scan configuration and its JSON loader.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::license::{AllowList, DEFAULT_LICENSES};

/// Source-file extension scanned by default (no leading dot).
pub const DEFAULT_EXTENSION: &str = "go";
/// Line-comment token that precedes the SPDX tag by default.
pub const DEFAULT_COMMENT_TOKEN: &str = "//";

/// Error type for config operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error while reading the config file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Deserialization failure.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
    /// Comment token could not be compiled into a marker pattern.
    #[error("marker pattern error: {0}")]
    Pattern(#[from] regex::Error),
    /// A field holds a value the scanner cannot work with.
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// What to scan and what to accept.
///
/// Every field has a default, so a config file only needs the keys it
/// overrides:
///
/// ```json
/// { "extension": "rs", "allowed": ["Apache-2.0"] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    /// File extension to scan, without the leading dot.
    pub extension: String,
    /// Literal token that starts the marker comment.
    pub comment_token: String,
    /// Accepted license identifiers.
    pub allowed: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extension: DEFAULT_EXTENSION.to_owned(),
            comment_token: DEFAULT_COMMENT_TOKEN.to_owned(),
            allowed: DEFAULT_LICENSES.iter().map(|s| (*s).to_owned()).collect(),
        }
    }
}

impl ScanConfig {
    /// Load and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let bytes = fs::read(path)?;
        let config: Self = serde_json::from_slice(&bytes)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make every file pass or fail trivially.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.extension.is_empty() {
            return Err(ConfigError::Invalid("extension must not be empty".into()));
        }
        if self.extension.starts_with('.') {
            return Err(ConfigError::Invalid(format!(
                "extension must not start with '.': {}",
                self.extension
            )));
        }
        if self.comment_token.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "comment_token must not be empty".into(),
            ));
        }
        if self.allowed.is_empty() {
            return Err(ConfigError::Invalid("allowed must list at least one license".into()));
        }
        Ok(())
    }

    /// Allow-list built from [`ScanConfig::allowed`].
    pub fn allow_list(&self) -> AllowList {
        AllowList::new(self.allowed.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(body: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(body.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_match_go_tree_policy() {
        let config = ScanConfig::default();
        assert_eq!(config.extension, "go");
        assert_eq!(config.comment_token, "//");
        assert_eq!(config.allow_list(), AllowList::default());
        config.validate().unwrap();
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let file = write_config(r#"{ "extension": "rs", "allowed": ["Apache-2.0"] }"#);
        let config = ScanConfig::load(file.path()).unwrap();
        assert_eq!(config.extension, "rs");
        assert_eq!(config.comment_token, "//");
        assert_eq!(config.allowed, vec!["Apache-2.0".to_owned()]);
    }

    #[test]
    fn empty_allow_list_is_rejected() {
        let file = write_config(r#"{ "allowed": [] }"#);
        let err = ScanConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)), "got {err:?}");
    }

    #[test]
    fn dotted_extension_is_rejected() {
        let config = ScanConfig {
            extension: ".go".into(),
            ..ScanConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let file = write_config(r#"{ "extensions": ["go"] }"#);
        let err = ScanConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Serde(_)), "got {err:?}");
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ScanConfig::load(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)), "got {err:?}");
    }
}
