//! Input handling module

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;

use anyhow::{Context, Result};
use std::io::{self, Read};

/// One text to tokenize, with a label for reporting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// File path, `<text>` or `<stdin>`
    pub source: String,
    pub text: String,
}

/// Where input text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Files or glob patterns
    Patterns(Vec<String>),
    /// Literal text given on the command line
    Text(String),
    /// Standard input
    Stdin,
}

impl InputSource {
    /// Pick the source from the command-line arguments
    pub fn from_args(patterns: &[String], text: Option<&str>) -> Self {
        match (text, patterns.is_empty()) {
            (Some(text), _) => InputSource::Text(text.to_string()),
            (None, false) => InputSource::Patterns(patterns.to_vec()),
            (None, true) => InputSource::Stdin,
        }
    }

    /// Read every document of this source
    pub fn read_documents(&self) -> Result<Vec<Document>> {
        match self {
            InputSource::Patterns(patterns) => resolve_patterns(patterns)?
                .into_iter()
                .map(|path| -> Result<Document> {
                    Ok(Document {
                        source: path.display().to_string(),
                        text: FileReader::read_text(&path)?,
                    })
                })
                .collect(),
            InputSource::Text(text) => Ok(vec![Document {
                source: "<text>".to_string(),
                text: text.clone(),
            }]),
            InputSource::Stdin => {
                let mut text = String::new();
                io::stdin()
                    .read_to_string(&mut text)
                    .context("Failed to read standard input")?;
                Ok(vec![Document {
                    source: "<stdin>".to_string(),
                    text,
                }])
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_source_selection() {
        assert_eq!(
            InputSource::from_args(&[], Some("hi")),
            InputSource::Text("hi".to_string())
        );
        assert_eq!(
            InputSource::from_args(&["a.txt".to_string()], None),
            InputSource::Patterns(vec!["a.txt".to_string()])
        );
        assert_eq!(InputSource::from_args(&[], None), InputSource::Stdin);
    }

    #[test]
    fn test_read_text_source() {
        let docs = InputSource::Text("Mr. Smith.".to_string())
            .read_documents()
            .unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].source, "<text>");
        assert_eq!(docs[0].text, "Mr. Smith.");
    }

    #[test]
    fn test_read_file_patterns() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("b.txt"), "second").unwrap();
        fs::write(temp_dir.path().join("a.txt"), "first").unwrap();

        let pattern = temp_dir.path().join("*.txt").display().to_string();
        let docs = InputSource::Patterns(vec![pattern]).read_documents().unwrap();

        let texts: Vec<_> = docs.iter().map(|d| d.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second"]);
        assert!(docs[0].source.ends_with("a.txt"));
    }
}
