//! Boundary resolver
//!
//! Post-processes the raw lexeme stream. Every `.`, `?` or `!` token is
//! either attached to the previous output token (abbreviation or number
//! continuation) or kept as a standalone sentence-ending token. The decision
//! looks at the raw neighbours `i - 1`, `i + 1` and `i + 2`; the rules below
//! are evaluated in order and the first match wins:
//!
//! 1. next raw token is `,` -> attach
//! 2. previous raw token is all uppercase -> attach
//! 3. (lexicon fallback only) last output token is a known abbreviation -> attach
//! 4. next raw token is `" "` and the one after starts uppercase -> standalone
//! 5. next raw token is lowercase or all digits -> attach
//! 6. otherwise -> standalone
//!
//! Rule 2 tests the casing of the raw previous token, not the abbreviation
//! lexicon. The lexicon only participates through rule 3, which is off by
//! default. Rule 4 compares against a literal single-space token; the
//! lexical matcher never emits whitespace, so it only fires on streams
//! built by callers.

mod casing;

pub use casing::{is_all_lowercase, is_all_uppercase, is_digits, starts_with_uppercase};

use crate::lexicon::AbbreviationSet;
use serde::Serialize;
use std::fmt;

/// Which resolver rule decided a terminator token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rule {
    /// Next raw token is a comma
    NextIsComma,
    /// Previous raw token is all uppercase
    PrevUppercase,
    /// Last output token is in the abbreviation lexicon
    LexiconAbbreviation,
    /// Followed by a space token and a capitalized token
    SentenceBreak,
    /// Next raw token is lowercase or numeric
    Continuation,
    /// No other rule applied
    SentenceEnd,
}

impl Rule {
    pub fn name(&self) -> &'static str {
        match self {
            Rule::NextIsComma => "next-is-comma",
            Rule::PrevUppercase => "prev-uppercase",
            Rule::LexiconAbbreviation => "lexicon-abbreviation",
            Rule::SentenceBreak => "sentence-break",
            Rule::Continuation => "continuation",
            Rule::SentenceEnd => "sentence-end",
        }
    }

    /// Whether the rule joins the terminator onto the previous token
    pub fn attaches(&self) -> bool {
        matches!(
            self,
            Rule::NextIsComma | Rule::PrevUppercase | Rule::LexiconAbbreviation | Rule::Continuation
        )
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where a terminator ended up in the output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Placement {
    /// Appended to the last output token
    Attached,
    /// Pushed as its own token
    Standalone,
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Placement::Attached => "attached",
            Placement::Standalone => "standalone",
        })
    }
}

/// Trace of one terminator decision
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decision {
    /// Index of the terminator in the raw token stream
    pub index: usize,
    /// The terminator itself
    pub token: String,
    pub rule: Rule,
    pub placement: Placement,
}

/// Resolved tokens together with the decisions that shaped them
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub tokens: Vec<String>,
    pub decisions: Vec<Decision>,
}

/// Resolver switches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolverOptions {
    /// Attach terminators that follow a known abbreviation (rule 3)
    pub lexicon_fallback: bool,
}

/// Disambiguates period, question and exclamation tokens
#[derive(Debug, Clone)]
pub struct BoundaryResolver {
    options: ResolverOptions,
    lexicon: &'static AbbreviationSet,
}

impl Default for BoundaryResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl BoundaryResolver {
    /// Resolver with default options
    pub fn new() -> Self {
        Self::with_options(ResolverOptions::default())
    }

    pub fn with_options(options: ResolverOptions) -> Self {
        Self {
            options,
            lexicon: AbbreviationSet::embedded(),
        }
    }

    pub fn options(&self) -> ResolverOptions {
        self.options
    }

    /// Resolve a raw token stream into final tokens
    pub fn resolve<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<String> {
        self.resolve_traced(tokens).tokens
    }

    /// Resolve and record the rule applied to each terminator
    pub fn resolve_traced<S: AsRef<str>>(&self, tokens: &[S]) -> Resolution {
        let mut resolution = Resolution {
            tokens: Vec::with_capacity(tokens.len()),
            decisions: Vec::new(),
        };

        for (i, raw) in tokens.iter().enumerate() {
            let token = raw.as_ref();
            if token.trim().is_empty() {
                continue;
            }
            if !is_terminator(token) {
                resolution.tokens.push(token.to_string());
                continue;
            }

            let rule = self.classify(tokens, i, &resolution.tokens);
            let placement = if rule.attaches() {
                attach(&mut resolution.tokens, token)
            } else {
                resolution.tokens.push(token.to_string());
                Placement::Standalone
            };

            log::trace!("terminator {token:?} at {i}: {rule:?} -> {placement:?}");
            resolution.decisions.push(Decision {
                index: i,
                token: token.to_string(),
                rule,
                placement,
            });
        }

        resolution
    }

    fn classify<S: AsRef<str>>(&self, tokens: &[S], i: usize, output: &[String]) -> Rule {
        let next = token_at(tokens, i + 1);
        let prev = i.checked_sub(1).and_then(|p| token_at(tokens, p));

        if next == Some(",") {
            Rule::NextIsComma
        } else if prev.is_some_and(is_all_uppercase) {
            Rule::PrevUppercase
        } else if self.options.lexicon_fallback
            && output
                .last()
                .is_some_and(|last| self.lexicon.contains(last.trim_end_matches('.')))
        {
            Rule::LexiconAbbreviation
        } else if next == Some(" ") && token_at(tokens, i + 2).is_some_and(starts_with_uppercase) {
            Rule::SentenceBreak
        } else if next.is_some_and(|n| is_all_lowercase(n) || is_digits(n)) {
            Rule::Continuation
        } else {
            Rule::SentenceEnd
        }
    }
}

/// `.`, `?` or `!`
pub fn is_terminator(token: &str) -> bool {
    matches!(token, "." | "?" | "!")
}

/// Resolve with default options
pub fn resolve<S: AsRef<str>>(tokens: &[S]) -> Vec<String> {
    BoundaryResolver::new().resolve(tokens)
}

fn token_at<S: AsRef<str>>(tokens: &[S], index: usize) -> Option<&str> {
    tokens.get(index).map(AsRef::as_ref)
}

/// Append to the last output token, or start the output with `token`
fn attach(output: &mut Vec<String>, token: &str) -> Placement {
    match output.last_mut() {
        Some(last) => {
            last.push_str(token);
            Placement::Attached
        }
        None => {
            output.push(token.to_string());
            Placement::Standalone
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules(tokens: &[&str]) -> Vec<Rule> {
        BoundaryResolver::new()
            .resolve_traced(tokens)
            .decisions
            .into_iter()
            .map(|d| d.rule)
            .collect()
    }

    #[test]
    fn test_non_terminators_pass_through() {
        assert_eq!(resolve(&["a", ",", "b"]), vec!["a", ",", "b"]);
    }

    #[test]
    fn test_blank_tokens_are_dropped() {
        assert_eq!(resolve(&["a", "", "  ", "\t", "b"]), vec!["a", "b"]);
    }

    #[test]
    fn test_next_is_comma_attaches() {
        assert_eq!(resolve(&["Co", ".", ",", "which"]), vec!["Co.", ",", "which"]);
        assert_eq!(rules(&["Co", ".", ",", "which"]), vec![Rule::NextIsComma]);
    }

    #[test]
    fn test_prev_uppercase_attaches() {
        assert_eq!(resolve(&["NASA", ".", "The"]), vec!["NASA.", "The"]);
        assert_eq!(rules(&["NASA", ".", "The"]), vec![Rule::PrevUppercase]);
    }

    #[test]
    fn test_sentence_break_on_space_then_capital() {
        let tokens = ["left", ".", " ", "He"];
        assert_eq!(resolve(&tokens), vec!["left", ".", "He"]);
        assert_eq!(rules(&tokens), vec![Rule::SentenceBreak]);
    }

    #[test]
    fn test_continuation_before_lowercase_or_digits() {
        assert_eq!(resolve(&["gmail", ".", "com"]), vec!["gmail.", "com"]);
        assert_eq!(resolve(&["No", ".", "5"]), vec!["No.", "5"]);
        assert_eq!(rules(&["No", ".", "5"]), vec![Rule::Continuation]);
    }

    #[test]
    fn test_sentence_end_default() {
        assert_eq!(resolve(&["Mr", ".", "Smith"]), vec!["Mr", ".", "Smith"]);
        assert_eq!(resolve(&["done", "?"]), vec!["done", "?"]);
        assert_eq!(rules(&["done", "!"]), vec![Rule::SentenceEnd]);
    }

    #[test]
    fn test_attach_with_empty_output_starts_output() {
        let resolution = BoundaryResolver::new().resolve_traced(&[".", ","]);
        assert_eq!(resolution.tokens, vec![".", ","]);
        assert_eq!(resolution.decisions[0].rule, Rule::NextIsComma);
        assert_eq!(resolution.decisions[0].placement, Placement::Standalone);

        // previous raw token was blank and dropped
        assert_eq!(resolve(&[" ", ".", "x"]), vec![".", "x"]);
    }

    #[test]
    fn test_rule_order_comma_beats_sentence_break() {
        assert_eq!(rules(&["A", ".", ","]), vec![Rule::NextIsComma]);
        assert_eq!(rules(&["A", ".", " ", "B"]), vec![Rule::PrevUppercase]);
    }

    #[test]
    fn test_prev_is_raw_not_output() {
        // "." after "." looks at the raw "." (uncased), not the merged "ID."
        let tokens = ["ID", ".", ".", "Next"];
        assert_eq!(resolve(&tokens), vec!["ID.", ".", "Next"]);
        assert_eq!(rules(&tokens), vec![Rule::PrevUppercase, Rule::SentenceEnd]);
    }

    #[test]
    fn test_lexicon_fallback_is_opt_in() {
        let tokens = ["Mr", ".", "Smith"];
        assert_eq!(resolve(&tokens), vec!["Mr", ".", "Smith"]);

        let resolver = BoundaryResolver::with_options(ResolverOptions {
            lexicon_fallback: true,
        });
        let resolution = resolver.resolve_traced(&tokens);
        assert_eq!(resolution.tokens, vec!["Mr.", "Smith"]);
        assert_eq!(resolution.decisions[0].rule, Rule::LexiconAbbreviation);

        // unknown words still end sentences
        assert_eq!(resolver.resolve(&["Smith", ".", "He"]), vec!["Smith", ".", "He"]);
    }

    #[test]
    fn test_lookahead_out_of_range_is_absent() {
        assert_eq!(resolve(&["end", "."]), vec!["end", "."]);
        assert_eq!(resolve(&["."]), vec!["."]);
        assert_eq!(resolve(&["x", ".", " "]), vec!["x", "."]);
    }

    #[test]
    fn test_owned_input() {
        let tokens: Vec<String> = vec!["3".into(), ".".into(), "14".into()];
        assert_eq!(resolve(&tokens), vec!["3.", "14"]);
    }
}
