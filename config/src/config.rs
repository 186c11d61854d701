//! Parser configuration file.
//!
//! Every key is optional; anything left out keeps its default.
//!
//! # Example YAML
//!
//! ```yaml
//! version: "1.0"
//! limits:
//!   name: 100
//!   phone: 20
//!   address: 200
//!   email: 100
//!   tag: 30
//!   group: 50
//!   note: 500
//! ```

use std::io::{BufReader, BufWriter};
use std::path::Path;

use edutrack_core::{FieldLimits, FieldValidators};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Format version written by [`ParserConfig::save`].
pub const CONFIG_VERSION: &str = "1.0";

/// Top-level parser configuration.
///
/// # Examples
///
/// ```
/// use edutrack_config::ParserConfig;
/// use edutrack_core::FieldKind;
///
/// let config = ParserConfig::from_yaml_str("limits:\n  tag: 12\n").unwrap();
/// assert_eq!(config.limits.max_len(FieldKind::Tag), 12);
/// assert_eq!(config.limits.max_len(FieldKind::Name), 100);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Configuration format version (e.g., `"1.0"`).
    pub version: String,
    /// Maximum length, in characters, of every field.
    pub limits: FieldLimits,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION.to_string(),
            limits: FieldLimits::default(),
        }
    }
}

impl ParserConfig {
    /// Loads and validates configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`Io`](ConfigError::Io) if the file cannot be read,
    /// [`Yaml`](ConfigError::Yaml) if parsing fails, or
    /// [`InvalidLimit`](ConfigError::InvalidLimit) if a limit is zero.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let reader = BufReader::new(file);
        let config: Self = serde_yaml::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates configuration from YAML text.
    ///
    /// An empty document yields the defaults.
    ///
    /// # Errors
    ///
    /// Same as [`load`](Self::load), minus I/O.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`Io`](ConfigError::Io) if the file cannot be written, or
    /// [`Yaml`](ConfigError::Yaml) if serialization fails.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = BufWriter::new(file);
        serde_yaml::to_writer(writer, self)?;
        Ok(())
    }

    /// Checks that every limit is greater than zero.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidLimit`](ConfigError::InvalidLimit) naming the first
    /// offending field.
    pub fn validate(&self) -> Result<()> {
        match self.limits.first_zero() {
            Some(kind) => Err(ConfigError::InvalidLimit(kind)),
            None => Ok(()),
        }
    }

    /// Field validators bound to the configured limits.
    pub fn validators(&self) -> FieldValidators {
        FieldValidators::new(self.limits)
    }
}

#[cfg(test)]
mod tests {
    use edutrack_core::FieldKind;

    use super::*;

    fn sample_yaml() -> &'static str {
        r#"
version: "1.0"
limits:
  name: 60
  phone: 15
  address: 120
  email: 80
  tag: 20
  group: 40
  note: 300
"#
    }

    #[test]
    fn test_deserialize_complete() {
        let config = ParserConfig::from_yaml_str(sample_yaml()).unwrap();
        assert_eq!(config.version, "1.0");
        assert_eq!(config.limits.name, 60);
        assert_eq!(config.limits.phone, 15);
        assert_eq!(config.limits.address, 120);
        assert_eq!(config.limits.email, 80);
        assert_eq!(config.limits.tag, 20);
        assert_eq!(config.limits.group, 40);
        assert_eq!(config.limits.note, 300);
    }

    #[test]
    fn test_partial_limits_fall_back_to_defaults() {
        let config = ParserConfig::from_yaml_str("limits:\n  phone: 12\n").unwrap();
        assert_eq!(config.version, CONFIG_VERSION);
        assert_eq!(config.limits.phone, 12);
        assert_eq!(config.limits.name, FieldLimits::default().name);
        assert_eq!(config.limits.note, FieldLimits::default().note);
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(ParserConfig::from_yaml_str("").unwrap(), ParserConfig::default());
        assert_eq!(
            ParserConfig::from_yaml_str("\n  \n").unwrap(),
            ParserConfig::default()
        );
    }

    #[test]
    fn test_zero_limit_rejected() {
        let err = ParserConfig::from_yaml_str("limits:\n  tag: 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLimit(FieldKind::Tag)));
        assert_eq!(
            err.to_string(),
            "invalid limit for tag: must be greater than zero"
        );
    }

    #[test]
    fn test_negative_limit_is_a_yaml_error() {
        let err = ParserConfig::from_yaml_str("limits:\n  name: -1\n").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[test]
    fn test_validators_use_limits() {
        let config = ParserConfig::from_yaml_str("limits:\n  name: 3\n").unwrap();
        let fields = config.validators();
        assert!(fields.name("Amy").is_ok());
        assert!(fields.name("Amya").is_err());
    }
}
