//! Rule-based word tokenization
//!
//! Splits natural-language text into words, numbers, abbreviations and
//! punctuation without any statistical model. Tokenization runs in two
//! stages:
//!
//! - **Lexical matcher** ([`lexer`]): an ordered grammar of lexical classes
//!   (dotted initials, fractions, numbers, words, ellipsis, punctuation)
//!   scanned left to right with first-match precedence.
//! - **Boundary resolver** ([`resolver`]): decides for each `.`, `?` and `!`
//!   whether it closes a sentence or belongs to the previous token.
//!
//! Baseline segmenters ([`segmenter`]) are available for side-by-side
//! comparison but are not used by the rule-based path.
//!
//! # Example
//!
//! ```rust
//! use ruletok_core::{is_abbreviation, tokenize_rule_based};
//!
//! let tokens = tokenize_rule_based("J.P. Bolduc, vice chairman of W.R. Grace & Co., resigned.");
//! assert_eq!(tokens[0], "J.P.");
//! assert_eq!(tokens[1], "Bolduc");
//! assert_eq!(tokens[2], ",");
//! assert!(tokens.contains(&"Co.".to_string()));
//!
//! assert!(is_abbreviation("Dr"));
//! ```

pub mod config;
pub mod error;
pub mod lexer;
pub mod lexicon;
pub mod resolver;
pub mod segmenter;
pub mod tokenizer;

pub use config::{Config, ConfigBuilder, TokenizerMode};
pub use error::{Error, Result};
pub use lexer::{match_tokens, Lexeme, LexicalClass, LexicalMatcher};
pub use lexicon::{is_abbreviation, AbbreviationSet};
pub use resolver::{resolve, BoundaryResolver, Decision, Placement, Resolution, ResolverOptions, Rule};
pub use segmenter::{
    hybrid_tokenize, load_baseline, statistical_tokenize, BaselineKind, Segmenter, UnicodeSegmenter,
};
pub use tokenizer::{tokenize_rule_based, Explanation, Tokenizer};
