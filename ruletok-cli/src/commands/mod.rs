//! CLI command implementations

use crate::input::InputSource;
use anyhow::Result;
use clap::{Args, Subcommand};
use ruletok_core::{AbbreviationSet, LexicalClass, TokenizerMode};
use std::io::{self, Write};

pub mod compare;
pub mod generate_config;
pub mod tokenize;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Tokenize text with the rule-based tokenizer
    Tokenize(tokenize::TokenizeArgs),

    /// Print statistical, hybrid and rule-based output side by side
    Compare(compare::CompareArgs),

    /// Write a commented configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// Lexical classes in precedence order
    Classes,

    /// The built-in abbreviation lexicon
    Abbreviations,

    /// Tokenizer modes
    Modes,
}

/// Where the text to tokenize comes from
#[derive(Debug, Args)]
pub struct SourceArgs {
    /// Input files or patterns (supports glob); reads stdin when omitted
    #[arg(short, long, value_name = "FILE/PATTERN", conflicts_with = "text")]
    pub input: Vec<String>,

    /// Tokenize this text instead of reading files
    #[arg(short, long, value_name = "TEXT")]
    pub text: Option<String>,
}

impl SourceArgs {
    pub fn input_source(&self) -> InputSource {
        InputSource::from_args(&self.input, self.text.as_deref())
    }
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Tokenize(args) => args.execute(),
            Commands::Compare(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => {
                let stdout = io::stdout();
                let mut out = stdout.lock();
                write_list(*subcommand, &mut out)
            }
        }
    }
}

/// Print the listing for `subcommand`
pub fn write_list(subcommand: ListCommands, out: &mut impl Write) -> Result<()> {
    match subcommand {
        ListCommands::Classes => {
            writeln!(out, "Lexical classes (first match wins):")?;
            for class in LexicalClass::PRECEDENCE {
                writeln!(
                    out,
                    "  {:>2}. {:<18} {}",
                    class.rank() + 1,
                    class.name(),
                    class.description()
                )?;
            }
        }
        ListCommands::Abbreviations => {
            let lexicon = AbbreviationSet::embedded();
            writeln!(out, "Abbreviations ({}):", lexicon.len())?;
            for (word, category) in lexicon.iter() {
                writeln!(out, "  {word:<8} {category}")?;
            }
        }
        ListCommands::Modes => {
            writeln!(out, "Tokenizer modes:")?;
            for mode in TokenizerMode::ALL {
                writeln!(out, "  {mode}")?;
            }
        }
    }
    Ok(())
}
