//! Lexical matcher
//!
//! Scans raw text left to right. At each position the classes of
//! [`LexicalClass::PRECEDENCE`] are tried in order and the first one that
//! matches wins; its span is emitted and the cursor jumps past it. Positions
//! where nothing matches (whitespace, `&`, `$`, ...) are skipped one
//! character at a time and produce no token.

mod class;
pub mod rules;

pub use class::LexicalClass;

use serde::Serialize;
use std::ops::Range;

/// A matched span of the input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lexeme<'a> {
    /// Matched text, borrowed from the input
    pub text: &'a str,
    /// Byte range of `text` in the input
    pub span: Range<usize>,
    /// Class that produced the match
    pub class: LexicalClass,
}

/// Ordered-alternative scanner over the lexical grammar
#[derive(Debug, Clone, Copy, Default)]
pub struct LexicalMatcher;

impl LexicalMatcher {
    /// Create a matcher over the built-in precedence table
    pub fn new() -> Self {
        Self
    }

    /// First class matching at the start of `rest`, with the match length
    pub fn match_at(&self, rest: &str) -> Option<(LexicalClass, usize)> {
        LexicalClass::PRECEDENCE
            .iter()
            .find_map(|&class| rules::match_class(class, rest).map(|len| (class, len)))
    }

    /// Scan `text` into lexemes, in input order
    pub fn scan<'a>(&self, text: &'a str) -> Vec<Lexeme<'a>> {
        let mut lexemes = Vec::new();
        let mut pos = 0;

        while pos < text.len() {
            let rest = &text[pos..];
            match self.match_at(rest) {
                Some((class, len)) => {
                    lexemes.push(Lexeme {
                        text: &rest[..len],
                        span: pos..pos + len,
                        class,
                    });
                    pos += len;
                }
                None => {
                    // Unmatched character, skip it
                    pos += rest.chars().next().map_or(1, char::len_utf8);
                }
            }
        }

        log::trace!("scanned {} bytes into {} lexemes", text.len(), lexemes.len());
        lexemes
    }

    /// Raw token strings of `text`, before boundary resolution
    pub fn match_tokens(&self, text: &str) -> Vec<String> {
        self.scan(text)
            .into_iter()
            .map(|lexeme| lexeme.text.to_string())
            .collect()
    }
}

/// Raw token strings of `text` using the default matcher
pub fn match_tokens(text: &str) -> Vec<String> {
    LexicalMatcher::new().match_tokens(text)
}
