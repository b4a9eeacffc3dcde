//! Configuration module
//!
//! Optional TOML file; every field has a default and command-line flags
//! override whatever the file sets.

use crate::error::CliError;
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use clap::ValueEnum;
use ruletok_core::Config;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Tokenizer configuration
    #[serde(default)]
    pub tokenizer: TokenizerSection,

    /// Output configuration
    #[serde(default)]
    pub output: OutputSection,
}

/// Tokenizer-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct TokenizerSection {
    /// `rule-based`, `statistical` or `hybrid`
    pub mode: String,

    /// Attach sentence punctuation after known abbreviations
    pub lexicon_fallback: bool,

    /// Baseline segmenter for the statistical and hybrid modes
    pub baseline: String,
}

impl Default for TokenizerSection {
    fn default() -> Self {
        Self {
            mode: "rule-based".to_string(),
            lexicon_fallback: false,
            baseline: "unicode".to_string(),
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputSection {
    /// Default output format
    pub format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            format: "text".to_string(),
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Load from `path`, or defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::from_toml_str(&content)?;
        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    /// Core tokenizer configuration described by the file
    pub fn core_config(&self) -> Result<Config> {
        let config = Config::builder()
            .mode_name(&self.tokenizer.mode)?
            .baseline_name(&self.tokenizer.baseline)?
            .lexicon_fallback(self.tokenizer.lexicon_fallback)
            .build()?;
        Ok(config)
    }

    /// Output format named by the file
    pub fn output_format(&self) -> Result<OutputFormat> {
        OutputFormat::from_str(&self.output.format, true).map_err(|e| {
            CliError::ConfigError(format!("output.format '{}': {e}", self.output.format)).into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ruletok_core::TokenizerMode;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_without_file() {
        let config = CliConfig::load(None).unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.core_config().unwrap(), Config::default());
        assert_eq!(config.output_format().unwrap(), OutputFormat::Text);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = CliConfig::from_toml_str("[tokenizer]\nmode = \"hybrid\"\n").unwrap();
        assert_eq!(config.tokenizer.mode, "hybrid");
        assert_eq!(config.tokenizer.baseline, "unicode");
        assert!(config.output.pretty_json);
        assert_eq!(config.core_config().unwrap().mode(), TokenizerMode::Hybrid);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[output]\nformat = \"json\"\npretty_json = false").unwrap();

        let config = CliConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.output_format().unwrap(), OutputFormat::Json);
        assert!(!config.output.pretty_json);
    }

    #[test]
    fn test_invalid_values() {
        let config = CliConfig::from_toml_str("[tokenizer]\nmode = \"neural\"\n").unwrap();
        assert!(config.core_config().is_err());

        let config = CliConfig::from_toml_str("[output]\nformat = \"xml\"\n").unwrap();
        let err = config.output_format().unwrap_err();
        assert!(err.to_string().contains("xml"));

        assert!(CliConfig::from_toml_str("tokenizer = 5").is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = CliConfig::load(Some(Path::new("/nonexistent/ruletok.toml"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_round_trip_through_toml() {
        let text = toml::to_string(&CliConfig::default()).unwrap();
        assert_eq!(CliConfig::from_toml_str(&text).unwrap(), CliConfig::default());
    }
}
