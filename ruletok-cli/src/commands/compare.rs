//! Compare command implementation

use super::SourceArgs;
use crate::config::CliConfig;
use crate::error::CliError;
use crate::output::{create_formatter, open_output, Comparison, OutputFormat};
use anyhow::Result;
use clap::Args;
use ruletok_core::{
    hybrid_tokenize, load_baseline, statistical_tokenize, Config, Segmenter, Tokenizer,
};
use std::path::PathBuf;

/// Arguments for the compare command
#[derive(Debug, Args)]
pub struct CompareArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Baseline segmenter (default: from config, else unicode)
    #[arg(short, long, value_name = "NAME")]
    pub baseline: Option<String>,

    /// Let the rule-based tokenizer attach punctuation after known abbreviations
    #[arg(long)]
    pub lexicon_fallback: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl CompareArgs {
    /// Execute the compare command
    pub fn execute(&self) -> Result<()> {
        let file_config = CliConfig::load(self.config.as_deref())?;

        // Collaborator failures surface before any text is read
        let baseline_name = self
            .baseline
            .as_deref()
            .unwrap_or(&file_config.tokenizer.baseline);
        let segmenter =
            load_baseline(baseline_name).map_err(|e| CliError::TokenizerError(e.to_string()))?;

        let config = Config::builder()
            .lexicon_fallback(self.lexicon_fallback || file_config.tokenizer.lexicon_fallback)
            .build()?;
        let tokenizer = Tokenizer::with_config(config)?;
        let format = match self.format {
            Some(format) => format,
            None => file_config.output_format()?,
        };

        let documents = self.source.input_source().read_documents()?;
        let writer = open_output(self.output.as_deref())?;
        let mut formatter = create_formatter(
            format,
            writer,
            documents.len() > 1,
            file_config.output.pretty_json,
        );

        for document in &documents {
            let comparison = compare(segmenter.as_ref(), &tokenizer, &document.text);
            formatter.format_comparison(&document.source, &comparison)?;
        }

        formatter.finish()
    }
}

/// Run every tokenizer over `text`
pub fn compare(segmenter: &dyn Segmenter, tokenizer: &Tokenizer, text: &str) -> Comparison {
    Comparison {
        statistical: statistical_tokenize(segmenter, text),
        hybrid: hybrid_tokenize(segmenter, text),
        rule_based: tokenizer.tokenize_rule_based(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ruletok_core::UnicodeSegmenter;

    #[test]
    fn test_compare_outputs_differ_on_abbreviations() {
        let comparison = compare(&UnicodeSegmenter, &Tokenizer::new(), "He sold 1/2 of U.S.A. stock.");
        assert!(comparison.rule_based.contains(&"1/2".to_string()));
        assert!(comparison.rule_based.contains(&"U.S.A.".to_string()));
        assert!(!comparison.statistical.contains(&"1/2".to_string()));
        assert_eq!(comparison.statistical.first().map(String::as_str), Some("He"));
    }

    #[test]
    fn test_compare_empty_text() {
        let comparison = compare(&UnicodeSegmenter, &Tokenizer::new(), "");
        assert!(comparison.statistical.is_empty());
        assert!(comparison.hybrid.is_empty());
        assert!(comparison.rule_based.is_empty());
    }
}
