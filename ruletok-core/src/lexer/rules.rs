//! Matcher functions, one per lexical class
//!
//! Every matcher is anchored at the start of its input and returns the byte
//! length of the longest match its own repetition operators allow, or `None`.
//! A matcher never returns `Some(0)`.

use super::LexicalClass;

/// Characters that may join two word runs inside a [`LexicalClass::Word`]
pub const CONNECTORS: [char; 7] = ['-', '\'', '?', '!', '@', '#', '^'];

/// Characters emitted on their own as [`LexicalClass::Punctuation`]
///
/// The set also covers the contiguous range `:`..=`_`, which includes
/// `< = > @ [ \ ] ^ _` and the ASCII capitals.
pub const PUNCTUATION: [char; 9] = ['.', ',', ';', '"', '\'', '?', '(', ')', '`'];

/// Word character: alphanumeric or underscore
pub fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Whether `ch` forms a single-character punctuation token
pub fn is_punctuation(ch: char) -> bool {
    PUNCTUATION.contains(&ch) || (':'..='_').contains(&ch)
}

/// Run the matcher for `class` at the start of `s`
pub fn match_class(class: LexicalClass, s: &str) -> Option<usize> {
    match class {
        LexicalClass::DottedInitials => dotted_initials(s),
        LexicalClass::Fraction => fraction(s),
        LexicalClass::Number => number(s),
        LexicalClass::NegativeNumber => negative_number(s),
        LexicalClass::Word => word(s),
        LexicalClass::DottedWordRun => dotted_word_run(s),
        LexicalClass::CapitalizedRun => capitalized_run(s),
        LexicalClass::WordWithPeriod => word_with_period(s),
        LexicalClass::Ellipsis => ellipsis(s),
        LexicalClass::Punctuation => punctuation(s),
    }
}

/// Byte length of the leading run of characters satisfying `pred`
fn run_len(s: &str, pred: impl Fn(char) -> bool) -> usize {
    s.char_indices()
        .find(|&(_, ch)| !pred(ch))
        .map_or(s.len(), |(i, _)| i)
}

fn digits(s: &str) -> usize {
    run_len(s, |ch| ch.is_ascii_digit())
}

fn non_empty(len: usize) -> Option<usize> {
    (len > 0).then_some(len)
}

/// `(?:[A-Za-z]\.){2,}`
pub fn dotted_initials(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    let mut pos = 0;
    let mut pairs = 0;
    while pos + 1 < bytes.len() && bytes[pos].is_ascii_alphabetic() && bytes[pos + 1] == b'.' {
        pos += 2;
        pairs += 1;
    }
    (pairs >= 2).then_some(pos)
}

/// `\d+/\d+`
pub fn fraction(s: &str) -> Option<usize> {
    let numerator = non_empty(digits(s))?;
    let rest = s[numerator..].strip_prefix('/')?;
    let denominator = non_empty(digits(rest))?;
    Some(numerator + 1 + denominator)
}

/// `\d+(?:\.\d+)?%?`
pub fn number(s: &str) -> Option<usize> {
    let mut pos = non_empty(digits(s))?;
    if let Some(after_dot) = s[pos..].strip_prefix('.') {
        let decimals = digits(after_dot);
        if decimals > 0 {
            pos += 1 + decimals;
        }
    }
    if s[pos..].starts_with('%') {
        pos += 1;
    }
    Some(pos)
}

/// `-\d+(?:\.\d+)?%?`
pub fn negative_number(s: &str) -> Option<usize> {
    s.strip_prefix('-').and_then(number).map(|len| len + 1)
}

/// `\w+(?:[-'?!@#^]\w+)*`
pub fn word(s: &str) -> Option<usize> {
    let mut pos = non_empty(run_len(s, is_word_char))?;
    while let Some(connector) = s[pos..].chars().next().filter(|ch| CONNECTORS.contains(ch)) {
        let after = pos + connector.len_utf8();
        let tail = run_len(&s[after..], is_word_char);
        if tail == 0 {
            break;
        }
        pos = after + tail;
    }
    Some(pos)
}

/// `(?:\w+\.){2,}`
pub fn dotted_word_run(s: &str) -> Option<usize> {
    let mut pos = 0;
    let mut segments = 0;
    loop {
        let head = run_len(&s[pos..], is_word_char);
        if head == 0 || !s[pos + head..].starts_with('.') {
            break;
        }
        pos += head + 1;
        segments += 1;
    }
    (segments >= 2).then_some(pos)
}

/// `(?:[A-Z][a-z]*\.?){2,}`
pub fn capitalized_run(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    let mut pos = 0;
    let mut words = 0;
    while pos < bytes.len() && bytes[pos].is_ascii_uppercase() {
        pos += 1;
        pos += run_len(&s[pos..], |ch| ch.is_ascii_lowercase());
        if bytes.get(pos) == Some(&b'.') {
            pos += 1;
        }
        words += 1;
    }
    (words >= 2).then_some(pos)
}

/// `[A-Za-z]+(?:\.[A-Za-z]+)?`
pub fn word_with_period(s: &str) -> Option<usize> {
    let letters = |ch: char| ch.is_ascii_alphabetic();
    let mut pos = non_empty(run_len(s, letters))?;
    if let Some(after_dot) = s[pos..].strip_prefix('.') {
        let tail = run_len(after_dot, letters);
        if tail > 0 {
            pos += 1 + tail;
        }
    }
    Some(pos)
}

/// `\.\.\.`
pub fn ellipsis(s: &str) -> Option<usize> {
    s.starts_with("...").then_some(3)
}

/// One character of the punctuation set
pub fn punctuation(s: &str) -> Option<usize> {
    s.chars()
        .next()
        .filter(|&ch| is_punctuation(ch))
        .map(char::len_utf8)
}
