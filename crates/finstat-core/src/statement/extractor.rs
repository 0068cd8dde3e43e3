//! Rule-based statement parser: financial line extraction plus metric
//! resolution over recognized text.

use tracing::{debug, info};

use crate::models::statement::{FinancialLine, Statement};

use super::StatementParser;
use super::rules::{normalize_amount, resolve_metrics, scan_tokens, split_sentences};

/// Rule-based statement parser.
///
/// A single forward pass with no state shared across calls: parsing the
/// same text twice yields identical statements.
pub struct RuleStatementParser;

impl RuleStatementParser {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RuleStatementParser {
    fn default() -> Self {
        Self::new()
    }
}

impl StatementParser for RuleStatementParser {
    fn parse(&self, text: &str) -> Statement {
        info!("parsing statement from {} characters of text", text.len());

        let narrative = split_sentences(text);
        let lines = extract_financial_lines(text);
        let metrics = resolve_metrics(&lines);

        debug!(
            sentences = narrative.len(),
            financial_lines = lines.len(),
            metrics_available = metrics.available_count(),
            "statement parsed"
        );

        Statement {
            narrative,
            lines,
            metrics,
        }
    }
}

/// Extract the financial lines of a document, in document order.
///
/// The text is split on `\n` or `\r\n`. A line with no money-like tokens,
/// or whose tokens all fail normalization, is discarded entirely; it never
/// becomes a zero-value line. The label is the trimmed text before the
/// first token regardless of whether that token itself parsed.
pub fn extract_financial_lines(text: &str) -> Vec<FinancialLine> {
    let mut lines = Vec::new();

    for raw in text.lines() {
        let tokens: Vec<_> = scan_tokens(raw).collect();
        let Some(first) = tokens.first() else {
            continue;
        };

        let values: Vec<_> = tokens
            .iter()
            .filter_map(|token| normalize_amount(token.text))
            .collect();
        if values.is_empty() {
            continue;
        }

        lines.push(FinancialLine {
            raw_line: raw.to_string(),
            label: raw[..first.start].trim().to_string(),
            values,
        });
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::statement::MetricName;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_extract_basic_table_row() {
        let lines = extract_financial_lines("Turnover            1,234,567");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].label, "Turnover");
        assert_eq!(lines[0].values, vec![dec("1234567")]);
        assert_eq!(lines[0].raw_line, "Turnover            1,234,567");
    }

    #[test]
    fn test_narrative_lines_discarded() {
        let text = "The directors present their report.\nTurnover 500\n";
        let lines = extract_financial_lines(text);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].label, "Turnover");
    }

    #[test]
    fn test_fully_numeric_line_has_empty_label() {
        let lines = extract_financial_lines("1,000  2,000");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].label, "");
        assert_eq!(lines[0].values, vec![dec("1000"), dec("2000")]);
    }

    #[test]
    fn test_values_preserve_left_to_right_order() {
        let lines = extract_financial_lines("Stocks  300  (120)  45");
        assert_eq!(lines[0].values, vec![dec("300"), dec("-120"), dec("45")]);
    }

    #[test]
    fn test_crlf_line_endings() {
        let lines = extract_financial_lines("Turnover 100\r\nDebtors 200\r\n");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].label, "Turnover");
        assert_eq!(lines[1].label, "Debtors");
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        assert!(extract_financial_lines("").is_empty());
    }

    #[test]
    fn test_line_with_only_unparseable_tokens_discarded() {
        // "1.2.3" is scanned as a token but has two decimal points, so it
        // fails normalization; the whole line is dropped.
        let lines = extract_financial_lines("Section ref 1.2.3\nTurnover 100");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].label, "Turnover");
    }

    #[test]
    fn test_failed_token_does_not_affect_siblings() {
        let lines = extract_financial_lines("Note 1.2.3 total 450");
        assert_eq!(lines.len(), 1);
        // The label still splits at the first token, parsed or not.
        assert_eq!(lines[0].label, "Note");
        assert_eq!(lines[0].values, vec![dec("450")]);
    }

    #[test]
    fn test_end_to_end_scenario() {
        let text = "Some narrative sentence with no numbers.\n\
                    Turnover            1,234,567\n\
                    Cash at bank and in hand   (500)\n";

        let statement = RuleStatementParser::new().parse(text);

        assert_eq!(statement.lines.len(), 2);
        assert_eq!(
            statement.metrics.get(MetricName::Turnover),
            Some(dec("1234567"))
        );
        assert_eq!(statement.metrics.get(MetricName::Cash), Some(dec("-500")));
        assert_eq!(statement.metrics.available_count(), 2);
    }

    #[test]
    fn test_empty_input_statement() {
        let statement = RuleStatementParser::new().parse("");
        assert!(statement.narrative.is_empty());
        assert!(statement.lines.is_empty());
        assert_eq!(statement.metrics.entries.len(), 7);
        assert!(statement.metrics.entries.iter().all(|e| e.value.is_none()));
    }

    #[test]
    fn test_parse_is_deterministic() {
        let text = "Turnover 100\nNet assets 50\nSome narrative. More text.";
        let parser = RuleStatementParser::new();
        assert_eq!(parser.parse(text), parser.parse(text));
    }
}
