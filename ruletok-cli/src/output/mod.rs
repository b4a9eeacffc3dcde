//! Output formatting module

use anyhow::{Context, Result};
use ruletok_core::Explanation;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Output the final tokens of one document
    fn format_tokens(&mut self, source: &str, tokens: &[String]) -> Result<()>;

    /// Output lexemes and resolver decisions of one document
    fn format_explanation(&mut self, source: &str, explanation: &Explanation<'_>) -> Result<()>;

    /// Output the three tokenizers side by side
    fn format_comparison(&mut self, source: &str, comparison: &Comparison) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One token per line
    Text,
    /// JSON array with one record per document
    Json,
}

/// Outputs of every tokenizer for the same text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comparison {
    pub statistical: Vec<String>,
    pub hybrid: Vec<String>,
    pub rule_based: Vec<String>,
}

/// Writer for `path`, or stdout
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write + Send + Sync>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout())),
    }
}

/// Formatter for `format` writing to `writer`
pub fn create_formatter(
    format: OutputFormat,
    writer: Box<dyn Write + Send + Sync>,
    show_source: bool,
    pretty_json: bool,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer, show_source)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
    }
}
