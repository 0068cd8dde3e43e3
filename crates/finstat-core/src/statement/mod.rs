//! Statement extraction module.

mod extractor;
pub mod rules;

pub use extractor::{RuleStatementParser, extract_financial_lines};

use crate::models::statement::Statement;

/// Trait for statement parsers.
pub trait StatementParser {
    /// Parse recognized text into a statement.
    ///
    /// Never fails: text with no financial content yields an empty line
    /// sequence and all-unavailable metrics.
    fn parse(&self, text: &str) -> Statement;
}
