//! Plain text output formatter

use super::{Comparison, OutputFormatter};
use anyhow::Result;
use ruletok_core::Explanation;
use std::io::Write;

/// Plain text formatter - outputs one token per line
pub struct TextFormatter<W: Write> {
    writer: W,
    /// Print a `==> source <==` header before each document
    show_source: bool,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W, show_source: bool) -> Self {
        Self {
            writer,
            show_source,
        }
    }

    fn header(&mut self, source: &str) -> Result<()> {
        if self.show_source {
            writeln!(self.writer, "==> {source} <==")?;
        }
        Ok(())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_tokens(&mut self, source: &str, tokens: &[String]) -> Result<()> {
        self.header(source)?;
        for token in tokens {
            writeln!(self.writer, "{token}")?;
        }
        Ok(())
    }

    fn format_explanation(&mut self, source: &str, explanation: &Explanation<'_>) -> Result<()> {
        self.header(source)?;

        writeln!(self.writer, "lexemes:")?;
        for lexeme in &explanation.lexemes {
            let span = format!("{}..{}", lexeme.span.start, lexeme.span.end);
            writeln!(
                self.writer,
                "  {span:<10} {:<16} {:?}",
                lexeme.class.name(),
                lexeme.text
            )?;
        }

        writeln!(self.writer, "decisions:")?;
        for decision in &explanation.resolution.decisions {
            writeln!(
                self.writer,
                "  #{:<4} {:?} {} -> {}",
                decision.index, decision.token, decision.rule, decision.placement
            )?;
        }

        writeln!(self.writer, "tokens:")?;
        for token in &explanation.resolution.tokens {
            writeln!(self.writer, "  {token}")?;
        }
        Ok(())
    }

    fn format_comparison(&mut self, source: &str, comparison: &Comparison) -> Result<()> {
        self.header(source)?;
        writeln!(self.writer, "Statistical Tokenizer Output: {:?}", comparison.statistical)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "Hybrid Tokenizer Output: {:?}", comparison.hybrid)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "Rule-based Tokenizer Output: {:?}", comparison.rule_based)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
