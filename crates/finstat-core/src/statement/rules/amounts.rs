//! Normalization of money-like tokens into signed decimal values, and the
//! display formatting used by summary reports.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

/// Normalize a raw money token into a signed decimal value.
///
/// An opening parenthesis becomes a minus sign (the accounting convention
/// for negatives) and the closing parenthesis is dropped; currency glyphs,
/// whitespace, and thousands commas are stripped. A token that is empty
/// after cleaning, or reduces to a lone `-` or `.`, or fails decimal
/// parsing (doubled signs, two decimal points) is not parseable and yields
/// `None` rather than an error.
///
/// A token like `1.234` parses as one-point-two-three-four: the period is
/// always a decimal point, never a European thousands separator.
pub fn normalize_amount(token: &str) -> Option<Decimal> {
    let cleaned = token.replace('(', "-").replace(')', "");
    let cleaned: String = cleaned
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    if cleaned.is_empty() || cleaned == "-" || cleaned == "." {
        return None;
    }

    Decimal::from_str(&cleaned).ok()
}

/// Render a metric value for display: currency glyph plus the
/// thousands-grouped integer part, or the literal `N/A` when absent.
///
/// Rounding is half-away-from-zero, so `€1,234,567` for 1234567.0 and
/// `€-500` for -500.
pub fn format_money(value: Option<Decimal>, symbol: &str) -> String {
    let Some(value) = value else {
        return "N/A".to_string();
    };

    let rounded = value
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let raw = rounded.to_string();
    let (sign, digits) = match raw.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw.as_str()),
    };

    // Insert a comma before every group of three digits from the right.
    let chars: Vec<char> = digits.chars().collect();
    let mut grouped = String::new();
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*c);
    }

    format!("{symbol}{sign}{grouped}")
}
