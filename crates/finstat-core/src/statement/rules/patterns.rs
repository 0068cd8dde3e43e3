//! Common regex patterns for statement extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Money-like token: optional currency glyph, optional whitespace,
    // optional opening parenthesis, one digit, then any run of digits,
    // commas, and periods, then an optional closing parenthesis. The
    // parentheses are not required to pair.
    pub static ref MONEY_PATTERN: Regex = Regex::new(
        r"[€£]?\s*\(?[0-9][0-9,.]*\)?"
    ).unwrap();

    // Sentence boundary: terminal punctuation followed by whitespace.
    pub static ref SENTENCE_BOUNDARY: Regex = Regex::new(
        r"[.!?]\s+"
    ).unwrap();
}
