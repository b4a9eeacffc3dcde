//! Generate config command implementation

use crate::error::CliError;
use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Commented configuration template; every value is the built-in default
pub const TEMPLATE: &str = r#"# ruletok configuration
#
# Command-line flags override the values below.

[tokenizer]
# rule-based | statistical | hybrid
mode = "rule-based"

# Attach ".", "?" or "!" to the previous token when that token is a known
# abbreviation (see `ruletok list abbreviations`). Rule-based mode only.
lexicon_fallback = false

# Baseline segmenter used by the statistical and hybrid modes and by
# `ruletok compare`
baseline = "unicode"

[output]
# text | json
format = "text"

# Indent JSON output
pretty_json = true
"#;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        if self.output.exists() && !self.force {
            return Err(CliError::ConfigError(format!(
                "{} already exists (use --force to overwrite)",
                self.output.display()
            ))
            .into());
        }

        fs::write(&self.output, TEMPLATE)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;
        log::info!("Wrote configuration template to {}", self.output.display());

        println!("✓ Configuration template written to {}", self.output.display());
        println!();
        println!("Use it with:");
        println!(
            "   ruletok tokenize -i input.txt --config {}",
            self.output.display()
        );

        Ok(())
    }
}
