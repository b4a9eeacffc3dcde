//! Abbreviation lexicon
//!
//! A fixed set of short forms (titles, Latin phrases, initialisms, place
//! codes). The embedded table is parsed once on first use and shared
//! read-only for the rest of the process.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::sync::OnceLock;

const EMBEDDED_TOML: &str = include_str!("../../configs/abbreviations.toml");

static EMBEDDED: OnceLock<AbbreviationSet> = OnceLock::new();

#[derive(Debug, Deserialize)]
struct LexiconFile {
    categories: BTreeMap<String, Vec<String>>,
}

/// Case-insensitive abbreviation set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AbbreviationSet {
    /// Lowercased abbreviation -> category
    entries: BTreeMap<String, String>,
}

impl AbbreviationSet {
    /// The built-in lexicon
    pub fn embedded() -> &'static AbbreviationSet {
        EMBEDDED.get_or_init(|| match Self::from_toml_str(EMBEDDED_TOML) {
            Ok(set) => {
                log::debug!("loaded {} embedded abbreviations", set.len());
                set
            }
            Err(e) => {
                log::error!("embedded abbreviation lexicon is unusable: {e}");
                Self::default()
            }
        })
    }

    /// Parse a lexicon from its TOML form
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let file: LexiconFile =
            toml::from_str(source).map_err(|e| Error::Lexicon(format!("invalid TOML: {e}")))?;

        for (category, words) in &file.categories {
            if words.iter().any(|w| w.trim().is_empty()) {
                return Err(Error::Lexicon(format!(
                    "empty abbreviation in category '{category}'"
                )));
            }
        }

        Ok(Self::from_categories(file.categories))
    }

    /// Build from `(category, abbreviations)` groups
    pub fn from_categories<I, W>(categories: I) -> Self
    where
        I: IntoIterator<Item = (String, W)>,
        W: IntoIterator<Item = String>,
    {
        let mut entries = BTreeMap::new();
        for (category, words) in categories {
            for word in words {
                entries.insert(word.trim().to_lowercase(), category.clone());
            }
        }
        Self { entries }
    }

    /// Membership test; the candidate is lowercased before lookup
    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(&word.to_lowercase())
    }

    /// Category of `word`, if it is a known abbreviation
    pub fn category(&self, word: &str) -> Option<&str> {
        self.entries.get(&word.to_lowercase()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(abbreviation, category)` pairs in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(w, c)| (w.as_str(), c.as_str()))
    }
}

/// Whether `word` is in the built-in lexicon, ignoring case
///
/// The boundary resolver does not consult this unless the lexicon fallback
/// is switched on in [`crate::resolver::ResolverOptions`].
pub fn is_abbreviation(word: &str) -> bool {
    AbbreviationSet::embedded().contains(word)
}
