//! Static lexicons consulted by the tokenizer

pub mod abbreviation;

pub use abbreviation::{is_abbreviation, AbbreviationSet};
