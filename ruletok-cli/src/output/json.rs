//! JSON output formatter

use super::{Comparison, OutputFormatter};
use anyhow::Result;
use ruletok_core::Explanation;
use serde::Serialize;
use serde_json::Value;
use std::io::Write;

/// JSON formatter - outputs one record per document as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    records: Vec<Value>,
    pretty: bool,
}

#[derive(Serialize)]
struct TokensRecord<'a> {
    source: &'a str,
    tokens: &'a [String],
}

#[derive(Serialize)]
struct ExplanationRecord<'a> {
    source: &'a str,
    #[serde(flatten)]
    explanation: &'a Explanation<'a>,
}

#[derive(Serialize)]
struct ComparisonRecord<'a> {
    source: &'a str,
    #[serde(flatten)]
    comparison: &'a Comparison,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            records: Vec::new(),
            pretty,
        }
    }

    fn push<T: Serialize>(&mut self, record: &T) -> Result<()> {
        self.records.push(serde_json::to_value(record)?);
        Ok(())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_tokens(&mut self, source: &str, tokens: &[String]) -> Result<()> {
        self.push(&TokensRecord { source, tokens })
    }

    fn format_explanation(&mut self, source: &str, explanation: &Explanation<'_>) -> Result<()> {
        self.push(&ExplanationRecord {
            source,
            explanation,
        })
    }

    fn format_comparison(&mut self, source: &str, comparison: &Comparison) -> Result<()> {
        self.push(&ComparisonRecord { source, comparison })
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.records)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.records)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ruletok_core::Tokenizer;

    fn finish(mut formatter: JsonFormatter<Vec<u8>>) -> Value {
        formatter.finish().unwrap();
        serde_json::from_slice(&formatter.writer).unwrap()
    }

    #[test]
    fn test_tokens_record() {
        let mut formatter = JsonFormatter::new(Vec::new(), false);
        formatter
            .format_tokens("<text>", &["J.P.".to_string(), "Bolduc".to_string()])
            .unwrap();
        let value = finish(formatter);
        assert_eq!(
            value,
            serde_json::json!([{ "source": "<text>", "tokens": ["J.P.", "Bolduc"] }])
        );
    }

    #[test]
    fn test_empty_output_is_empty_array() {
        let value = finish(JsonFormatter::new(Vec::new(), true));
        assert_eq!(value, serde_json::json!([]));
    }

    #[test]
    fn test_explanation_record() {
        let explanation = Tokenizer::new().explain("NASA. x");
        let mut formatter = JsonFormatter::new(Vec::new(), true);
        formatter.format_explanation("<text>", &explanation).unwrap();
        let value = finish(formatter);

        let record = &value[0];
        assert_eq!(record["source"], "<text>");
        assert_eq!(record["lexemes"][0]["class"], "word");
        assert_eq!(record["lexemes"][0]["span"]["end"], 4);
        assert_eq!(record["resolution"]["decisions"][0]["rule"], "prev-uppercase");
        assert_eq!(record["resolution"]["tokens"], serde_json::json!(["NASA.", "x"]));
    }

    #[test]
    fn test_comparison_record() {
        let comparison = Comparison {
            statistical: vec!["a".into()],
            hybrid: vec![],
            rule_based: vec!["a".into()],
        };
        let mut formatter = JsonFormatter::new(Vec::new(), false);
        formatter.format_comparison("f.txt", &comparison).unwrap();
        let value = finish(formatter);
        assert_eq!(value[0]["source"], "f.txt");
        assert_eq!(value[0]["rule_based"], serde_json::json!(["a"]));
        assert_eq!(value[0]["hybrid"], serde_json::json!([]));
    }
}
