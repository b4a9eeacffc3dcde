//! Tokenize command implementation

use super::SourceArgs;
use crate::config::CliConfig;
use crate::error::CliError;
use crate::output::{create_formatter, open_output, OutputFormat};
use anyhow::Result;
use clap::Args;
use ruletok_core::{Config, Tokenizer, TokenizerMode};
use std::path::PathBuf;

/// Arguments for the tokenize command
#[derive(Debug, Args)]
pub struct TokenizeArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Tokenizer mode (default: from config, else rule-based)
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Attach sentence punctuation that follows a known abbreviation
    #[arg(long)]
    pub lexicon_fallback: bool,

    /// Show lexemes and resolver decisions instead of plain tokens
    #[arg(long)]
    pub explain: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Tokenizer modes accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ModeArg {
    /// Lexical matcher plus boundary resolver
    RuleBased,
    /// Baseline word segmentation
    Statistical,
    /// Baseline sentence then word segmentation
    Hybrid,
}

impl From<ModeArg> for TokenizerMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::RuleBased => TokenizerMode::RuleBased,
            ModeArg::Statistical => TokenizerMode::Statistical,
            ModeArg::Hybrid => TokenizerMode::Hybrid,
        }
    }
}

impl TokenizeArgs {
    /// Execute the tokenize command
    pub fn execute(&self) -> Result<()> {
        log::info!("Starting tokenization");

        let file_config = CliConfig::load(self.config.as_deref())?;
        let config = self.core_config(&file_config)?;
        if self.explain && config.mode() != TokenizerMode::RuleBased {
            log::warn!("--explain always shows the rule-based pipeline");
        }
        let tokenizer =
            Tokenizer::with_config(config).map_err(|e| CliError::TokenizerError(e.to_string()))?;
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
            if self.explain {
                let explanation = tokenizer.explain(&document.text);
                formatter.format_explanation(&document.source, &explanation)?;
            } else {
                let tokens = tokenizer.tokenize(&document.text);
                log::info!("{}: {} tokens", document.source, tokens.len());
                formatter.format_tokens(&document.source, &tokens)?;
            }
        }

        formatter.finish()
    }

    /// Merge command-line flags over the file configuration
    fn core_config(&self, file_config: &CliConfig) -> Result<Config> {
        let base = file_config.core_config()?;
        let config = Config::builder()
            .mode(self.mode.map_or(base.mode(), TokenizerMode::from))
            .baseline(base.baseline())
            .lexicon_fallback(self.lexicon_fallback || base.lexicon_fallback())
            .build()?;
        Ok(config)
    }
}
