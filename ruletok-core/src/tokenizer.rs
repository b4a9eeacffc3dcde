//! Configured tokenizer facade

use crate::config::{Config, TokenizerMode};
use crate::error::Result;
use crate::lexer::{Lexeme, LexicalMatcher};
use crate::resolver::{BoundaryResolver, Resolution, ResolverOptions};
use crate::segmenter::{hybrid_tokenize, statistical_tokenize, Segmenter};
use serde::Serialize;
use std::fmt;

/// Raw lexemes and resolver trace for one input
#[derive(Debug, Clone, Serialize)]
pub struct Explanation<'a> {
    pub lexemes: Vec<Lexeme<'a>>,
    pub resolution: Resolution,
}

/// Tokenizer built from a [`Config`]
///
/// Baseline segmenters are initialized in [`Tokenizer::with_config`], so a
/// missing collaborator is reported before any text is processed.
pub struct Tokenizer {
    config: Config,
    matcher: LexicalMatcher,
    resolver: BoundaryResolver,
    baseline: Option<Box<dyn Segmenter>>,
}

impl fmt::Debug for Tokenizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tokenizer")
            .field("config", &self.config)
            .field("baseline", &self.baseline.as_ref().map(|s| s.name()))
            .finish_non_exhaustive()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    /// Rule-based tokenizer with default options
    pub fn new() -> Self {
        Self {
            config: Config::default(),
            matcher: LexicalMatcher::new(),
            resolver: BoundaryResolver::new(),
            baseline: None,
        }
    }

    /// Tokenizer for a validated configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;

        let baseline = if config.mode.needs_baseline() {
            Some(config.baseline.load()?)
        } else {
            None
        };
        let resolver = BoundaryResolver::with_options(ResolverOptions {
            lexicon_fallback: config.lexicon_fallback,
        });

        Ok(Self {
            config,
            matcher: LexicalMatcher::new(),
            resolver,
            baseline,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Tokenize `text` with the configured mode
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let tokens = match (self.config.mode, self.baseline.as_deref()) {
            (TokenizerMode::Statistical, Some(segmenter)) => statistical_tokenize(segmenter, text),
            (TokenizerMode::Hybrid, Some(segmenter)) => hybrid_tokenize(segmenter, text),
            _ => self.tokenize_rule_based(text),
        };
        log::debug!(
            "{} tokenizer: {} bytes -> {} tokens",
            self.config.mode,
            text.len(),
            tokens.len()
        );
        tokens
    }

    /// Lexical matcher then boundary resolver, regardless of mode
    pub fn tokenize_rule_based(&self, text: &str) -> Vec<String> {
        let lexemes = self.matcher.scan(text);
        let raw: Vec<&str> = lexemes.iter().map(|l| l.text).collect();
        self.resolver.resolve(&raw)
    }

    /// Rule-based tokenization with the intermediate stages exposed
    pub fn explain<'a>(&self, text: &'a str) -> Explanation<'a> {
        let lexemes = self.matcher.scan(text);
        let raw: Vec<&str> = lexemes.iter().map(|l| l.text).collect();
        let resolution = self.resolver.resolve_traced(&raw);
        Explanation {
            lexemes,
            resolution,
        }
    }
}

/// Tokenize `text` with the rule-based pipeline and default options
pub fn tokenize_rule_based(text: &str) -> Vec<String> {
    Tokenizer::new().tokenize_rule_based(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::Rule;

    #[test]
    fn test_rule_based_default() {
        assert_eq!(
            tokenize_rule_based("Growth of -2.5% was seen."),
            vec!["Growth", "of", "-2.5%", "was", "seen", "."]
        );
    }

    #[test]
    fn test_modes_dispatch() {
        let text = "Hi there. Bye now.";

        let statistical = Tokenizer::with_config(
            Config::builder().mode(TokenizerMode::Statistical).build().unwrap(),
        )
        .unwrap();
        assert_eq!(
            statistical.tokenize(text),
            vec!["Hi", "there", ".", "Bye", "now", "."]
        );

        let hybrid =
            Tokenizer::with_config(Config::builder().mode(TokenizerMode::Hybrid).build().unwrap())
                .unwrap();
        assert_eq!(hybrid.tokenize(text), statistical.tokenize(text));

        // rule-based path stays available on any tokenizer
        assert_eq!(
            hybrid.tokenize_rule_based(text),
            Tokenizer::new().tokenize(text)
        );
    }

    #[test]
    fn test_rule_based_has_no_baseline() {
        let tokenizer = Tokenizer::with_config(Config::default()).unwrap();
        assert!(tokenizer.baseline.is_none());
        assert!(format!("{tokenizer:?}").contains("Tokenizer"));
    }

    #[test]
    fn test_lexicon_fallback_config() {
        let tokenizer =
            Tokenizer::with_config(Config::builder().lexicon_fallback(true).build().unwrap())
                .unwrap();
        assert_eq!(
            tokenizer.tokenize("Mr. Smith left."),
            vec!["Mr.", "Smith", "left", "."]
        );
    }

    #[test]
    fn test_explain() {
        let explanation = Tokenizer::new().explain("Co., Ltd.");
        let raw: Vec<_> = explanation.lexemes.iter().map(|l| l.text).collect();
        assert_eq!(raw, vec!["Co", ".", ",", "Ltd", "."]);
        assert_eq!(explanation.resolution.tokens, vec!["Co.", ",", "Ltd", "."]);
        let rules: Vec<_> = explanation.resolution.decisions.iter().map(|d| d.rule).collect();
        assert_eq!(rules, vec![Rule::NextIsComma, Rule::SentenceEnd]);
    }
}
