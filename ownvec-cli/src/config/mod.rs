//! Configuration module

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::CliError;

/// Demonstration configuration structure
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct DemoConfig {
    /// What the demonstration creates and probes
    #[serde(default)]
    pub demo: ScenarioConfig,

    /// Accepted range for processed values
    #[serde(default)]
    pub range: RangeConfig,
}

/// Scenario-related configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ScenarioConfig {
    /// Plain integers emplaced into the integer array
    pub int_values: Vec<i32>,

    /// Values passed through the range check, in order
    pub probe_values: Vec<i32>,

    /// Index read to trigger an out-of-range failure
    pub probe_index: usize,

    /// Let the out-of-range failure escape instead of catching it
    pub strict: bool,

    /// Samples emplaced into the sample array
    pub samples: Vec<SampleSpec>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            samples: vec![
                SampleSpec::new("Object 1", 10),
                SampleSpec::new("Object 2", 20),
                SampleSpec::new("Object 3", 30),
            ],
            int_values: vec![100, 200, 300],
            probe_values: vec![50, 150],
            probe_index: 10,
            strict: false,
        }
    }
}

/// Name and value of one sample
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct SampleSpec {
    /// Sample name
    pub name: String,
    /// Initial value
    pub value: i32,
}

impl SampleSpec {
    /// Create a sample spec
    pub fn new(name: impl Into<String>, value: i32) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Inclusive value range
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct RangeConfig {
    /// Lowest accepted value
    pub min: i32,
    /// Highest accepted value
    pub max: i32,
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self { min: 0, max: 100 }
    }
}

impl RangeConfig {
    /// Whether `value` lies within the range
    pub fn contains(&self, value: i32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

impl DemoConfig {
    /// Load a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Parse a configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: DemoConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Render as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }

    /// Check values that the type system cannot
    pub fn validate(&self) -> ownvec_core::Result<()> {
        if self.range.min > self.range.max {
            return Err(ownvec_core::Error::invalid_argument(format!(
                "range min {} exceeds max {}",
                self.range.min, self.range.max
            )));
        }
        if self.demo.samples.is_empty() {
            return Err(ownvec_core::Error::invalid_argument(
                "at least one sample is required",
            ));
        }
        if let Some(sample) = self.demo.samples.iter().find(|s| s.value < 0) {
            return Err(ownvec_core::Error::invalid_argument(format!(
                "sample '{}' has negative value {}",
                sample.name, sample.value
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = DemoConfig::default();
        assert_eq!(config.demo.samples.len(), 3);
        assert_eq!(config.demo.samples[1], SampleSpec::new("Object 2", 20));
        assert_eq!(config.demo.probe_index, 10);
        assert_eq!(config.range, RangeConfig { min: 0, max: 100 });
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = DemoConfig::from_toml("[range]\nmax = 200\n").unwrap();
        assert_eq!(config.range.min, 0);
        assert_eq!(config.range.max, 200);
        assert_eq!(config.demo, ScenarioConfig::default());
    }

    #[test]
    fn test_roundtrip_through_toml() {
        let config = DemoConfig::default();
        let text = config.to_toml().unwrap();
        assert!(text.contains("[demo]"));
        assert!(text.contains("[range]"));
        assert_eq!(DemoConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_validate_rejects_inverted_range() {
        let mut config = DemoConfig::default();
        config.range = RangeConfig { min: 10, max: 5 };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("range min 10 exceeds max 5"));
    }

    #[test]
    fn test_validate_rejects_negative_sample() {
        let mut config = DemoConfig::default();
        config.demo.samples.push(SampleSpec::new("bad", -1));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_samples() {
        let mut config = DemoConfig::default();
        config.demo.samples.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_range_contains_is_inclusive() {
        let range = RangeConfig::default();
        assert!(range.contains(0));
        assert!(range.contains(100));
        assert!(!range.contains(-1));
        assert!(!range.contains(101));
    }

    #[test]
    fn test_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "[demo]\nprobe_index = 4\nstrict = true\n").unwrap();

        let config = DemoConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.demo.probe_index, 4);
        assert!(config.demo.strict);
    }

    #[test]
    fn test_from_missing_file() {
        let err = DemoConfig::from_file(Path::new("does/not/exist.toml")).unwrap_err();
        assert!(err.to_string().contains("File not found"));
    }
}
