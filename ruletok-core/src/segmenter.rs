//! Baseline segmenters
//!
//! External word and sentence segmentation used to produce comparison
//! output next to the rule-based tokenizer. The rule-based path never calls
//! into this module.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;
use unicode_segmentation::UnicodeSegmentation;

/// Word and sentence segmentation capability
pub trait Segmenter: Send + Sync {
    /// Name used in configuration and reports
    fn name(&self) -> &'static str;

    /// Split `text` into word tokens
    fn words(&self, text: &str) -> Vec<String>;

    /// Split `text` into sentences
    fn sentences(&self, text: &str) -> Vec<String>;
}

/// UAX #29 word and sentence boundaries
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeSegmenter;

impl Segmenter for UnicodeSegmenter {
    fn name(&self) -> &'static str {
        "unicode"
    }

    fn words(&self, text: &str) -> Vec<String> {
        text.split_word_bounds()
            .filter(|segment| !segment.trim().is_empty())
            .map(str::to_string)
            .collect()
    }

    fn sentences(&self, text: &str) -> Vec<String> {
        text.split_sentence_bounds()
            .map(str::trim)
            .filter(|sentence| !sentence.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Available baseline segmenters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BaselineKind {
    /// [`UnicodeSegmenter`]
    #[default]
    Unicode,
}

impl BaselineKind {
    pub const ALL: [BaselineKind; 1] = [BaselineKind::Unicode];

    pub fn name(&self) -> &'static str {
        match self {
            BaselineKind::Unicode => "unicode",
        }
    }

    /// Instantiate the segmenter
    pub fn load(&self) -> Result<Box<dyn Segmenter>> {
        let segmenter: Box<dyn Segmenter> = match self {
            BaselineKind::Unicode => Box::new(UnicodeSegmenter),
        };
        log::debug!("initialized baseline segmenter '{}'", segmenter.name());
        Ok(segmenter)
    }
}

impl FromStr for BaselineKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "unicode" | "uax29" => Ok(BaselineKind::Unicode),
            _ => Err(Error::SegmenterInit {
                name: s.to_string(),
                reason: format!(
                    "unknown segmenter, available: {}",
                    BaselineKind::ALL.map(|k| k.name()).join(", ")
                ),
            }),
        }
    }
}

impl fmt::Display for BaselineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Look up and initialize a baseline segmenter by name
pub fn load_baseline(name: &str) -> Result<Box<dyn Segmenter>> {
    name.parse::<BaselineKind>()?.load()
}

/// Word segmentation over the whole text
pub fn statistical_tokenize(segmenter: &dyn Segmenter, text: &str) -> Vec<String> {
    segmenter.words(text)
}

/// Sentence segmentation first, then word segmentation per sentence
pub fn hybrid_tokenize(segmenter: &dyn Segmenter, text: &str) -> Vec<String> {
    segmenter
        .sentences(text)
        .iter()
        .flat_map(|sentence| segmenter.words(sentence))
        .collect()
}
