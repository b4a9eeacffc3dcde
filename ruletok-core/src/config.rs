//! Tokenizer configuration

use crate::error::{Error, Result};
use crate::segmenter::BaselineKind;
use std::fmt;
use std::str::FromStr;

/// Which tokenizer produces the output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TokenizerMode {
    /// Lexical matcher followed by the boundary resolver
    #[default]
    RuleBased,
    /// Baseline word segmentation only
    Statistical,
    /// Baseline sentence segmentation, then word segmentation
    Hybrid,
}

impl TokenizerMode {
    pub const ALL: [TokenizerMode; 3] = [
        TokenizerMode::RuleBased,
        TokenizerMode::Statistical,
        TokenizerMode::Hybrid,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TokenizerMode::RuleBased => "rule-based",
            TokenizerMode::Statistical => "statistical",
            TokenizerMode::Hybrid => "hybrid",
        }
    }

    /// Whether this mode needs a baseline segmenter
    pub fn needs_baseline(&self) -> bool {
        !matches!(self, TokenizerMode::RuleBased)
    }
}

impl FromStr for TokenizerMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "rule-based" | "rule" | "rules" => Ok(TokenizerMode::RuleBased),
            "statistical" | "words" => Ok(TokenizerMode::Statistical),
            "hybrid" => Ok(TokenizerMode::Hybrid),
            _ => Err(Error::Configuration(format!("unknown tokenizer mode: {s}"))),
        }
    }
}

impl fmt::Display for TokenizerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Tokenizer configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub(crate) mode: TokenizerMode,
    pub(crate) lexicon_fallback: bool,
    pub(crate) baseline: BaselineKind,
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    pub fn mode(&self) -> TokenizerMode {
        self.mode
    }

    pub fn lexicon_fallback(&self) -> bool {
        self.lexicon_fallback
    }

    pub fn baseline(&self) -> BaselineKind {
        self.baseline
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<()> {
        if self.lexicon_fallback && self.mode != TokenizerMode::RuleBased {
            return Err(Error::Configuration(format!(
                "lexicon_fallback only applies to rule-based mode, not {}",
                self.mode
            )));
        }
        Ok(())
    }
}

/// Fluent builder for [`Config`]
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    mode: Option<TokenizerMode>,
    lexicon_fallback: Option<bool>,
    baseline: Option<BaselineKind>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(mut self, mode: TokenizerMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Set the mode by name (`rule-based`, `statistical`, `hybrid`)
    pub fn mode_name(mut self, name: &str) -> Result<Self> {
        self.mode = Some(name.parse()?);
        Ok(self)
    }

    /// Attach terminators after known abbreviations
    pub fn lexicon_fallback(mut self, enabled: bool) -> Self {
        self.lexicon_fallback = Some(enabled);
        self
    }

    pub fn baseline(mut self, kind: BaselineKind) -> Self {
        self.baseline = Some(kind);
        self
    }

    /// Set the baseline segmenter by name
    pub fn baseline_name(mut self, name: &str) -> Result<Self> {
        self.baseline = Some(name.parse()?);
        Ok(self)
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        if let Some(enabled) = self.lexicon_fallback {
            config.lexicon_fallback = enabled;
        }
        if let Some(baseline) = self.baseline {
            config.baseline = baseline;
        }

        config.validate()?;
        Ok(config)
    }
}
