//! Lexical classes and their precedence

use serde::Serialize;
use std::fmt;

/// One alternative of the lexical grammar.
///
/// Variants are declared in precedence order; [`LexicalClass::PRECEDENCE`]
/// is the table the scanner walks at every position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LexicalClass {
    /// Two or more `letter.` pairs, e.g. `U.S.A.`
    DottedInitials,
    /// `digits/digits`
    Fraction,
    /// Non-negative number with optional decimal part and `%`
    Number,
    /// `-` followed by a number
    NegativeNumber,
    /// Word characters joined by connector characters (`energy-services`)
    Word,
    /// Two or more `word.` segments
    DottedWordRun,
    /// Two or more capitalized words, each optionally period-terminated
    CapitalizedRun,
    /// Letters optionally followed by one `.letters` segment
    WordWithPeriod,
    /// Literal `...`
    Ellipsis,
    /// A single character from the punctuation set
    Punctuation,
}

impl LexicalClass {
    /// All classes, highest precedence first.
    pub const PRECEDENCE: [LexicalClass; 10] = [
        LexicalClass::DottedInitials,
        LexicalClass::Fraction,
        LexicalClass::Number,
        LexicalClass::NegativeNumber,
        LexicalClass::Word,
        LexicalClass::DottedWordRun,
        LexicalClass::CapitalizedRun,
        LexicalClass::WordWithPeriod,
        LexicalClass::Ellipsis,
        LexicalClass::Punctuation,
    ];

    /// Stable kebab-case name
    pub fn name(&self) -> &'static str {
        match self {
            LexicalClass::DottedInitials => "dotted-initials",
            LexicalClass::Fraction => "fraction",
            LexicalClass::Number => "number",
            LexicalClass::NegativeNumber => "negative-number",
            LexicalClass::Word => "word",
            LexicalClass::DottedWordRun => "dotted-word-run",
            LexicalClass::CapitalizedRun => "capitalized-run",
            LexicalClass::WordWithPeriod => "word-with-period",
            LexicalClass::Ellipsis => "ellipsis",
            LexicalClass::Punctuation => "punctuation",
        }
    }

    /// Short human description, used by `ruletok list classes`
    pub fn description(&self) -> &'static str {
        match self {
            LexicalClass::DottedInitials => "abbreviation with periods, e.g. U.S.A.",
            LexicalClass::Fraction => "simple fraction, e.g. 1/2",
            LexicalClass::Number => "number with optional decimals and percent, e.g. 83.4%",
            LexicalClass::NegativeNumber => "negative number, e.g. -2.5%",
            LexicalClass::Word => "word with internal connectors, e.g. company's",
            LexicalClass::DottedWordRun => "period-separated word chain, e.g. ab.cd.",
            LexicalClass::CapitalizedRun => "capitalized word run, e.g. CoCorp.",
            LexicalClass::WordWithPeriod => "word with one inner period, e.g. Co.uk",
            LexicalClass::Ellipsis => "ellipsis ...",
            LexicalClass::Punctuation => "single punctuation character",
        }
    }

    /// Position in the precedence table (0 = tried first)
    pub fn rank(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for LexicalClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precedence_matches_declaration_order() {
        for (i, class) in LexicalClass::PRECEDENCE.iter().enumerate() {
            assert_eq!(class.rank(), i, "{class} out of order");
        }
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<_> = LexicalClass::PRECEDENCE.iter().map(|c| c.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), LexicalClass::PRECEDENCE.len());
    }
}
