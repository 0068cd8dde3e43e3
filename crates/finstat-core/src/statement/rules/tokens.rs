//! Money-token scanning within a single line of recognized text.

use regex::Matches;

use super::patterns::MONEY_PATTERN;

/// A money-like substring found in a line, with its byte offset.
///
/// Tokens are transient: they borrow the line and only the first token's
/// offset is ever used, to split the label from the values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericToken<'a> {
    /// The matched substring, currency glyph and parentheses included.
    pub text: &'a str,
    /// Byte offset of the match start within the line.
    pub start: usize,
}

/// Iterator over the money-like tokens of a line, left to right.
pub struct TokenScan<'a> {
    matches: Matches<'static, 'a>,
}

impl<'a> Iterator for TokenScan<'a> {
    type Item = NumericToken<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.matches.next().map(|m| NumericToken {
            text: m.as_str(),
            start: m.start(),
        })
    }
}

/// Scan a line for money-like tokens.
///
/// Lazy and restartable; matches are non-overlapping, greedy, and in
/// left-to-right order. An empty line yields an empty sequence.
pub fn scan_tokens(line: &str) -> TokenScan<'_> {
    TokenScan {
        matches: MONEY_PATTERN.find_iter(line),
    }
}
