//! Key metric resolution by ordered keyword matching over financial lines.

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::statement::{FinancialLine, MetricName, MetricReport, MetricValue};

/// Lookup keywords per metric, in resolution order.
///
/// Keyword order encodes priority: more specific terms come before generic
/// ones ("profit for the financial year" before "profit") to cut false
/// positives from loosely related lines. Matching is a case-folded
/// substring test against the line label, which tolerates OCR noise and
/// surrounding boilerplate.
pub static METRIC_KEYWORDS: &[(MetricName, &[&str])] = &[
    (MetricName::Turnover, &["turnover", "sales"]),
    (
        MetricName::ProfitForTheYear,
        &["profit for the financial year", "profit"],
    ),
    (MetricName::TangibleAssets, &["tangible assets", "tangible"]),
    (MetricName::Stocks, &["stocks", "inventory", "inventories"]),
    (MetricName::Debtors, &["debtors", "trade debtors"]),
    (
        MetricName::Cash,
        &["cash at bank", "cash at bank and in hand", "cash"],
    ),
    (MetricName::NetAssets, &["net assets"]),
];

/// Resolve every metric from the extracted financial lines.
///
/// For each metric the keywords are tried in table order; the first
/// keyword whose case-folded text appears in some line label wins, taking
/// the first value of the first such line in document order. A later, more
/// specific line can never override an earlier generic match; that
/// tie-break is part of the contract.
pub fn resolve_metrics(lines: &[FinancialLine]) -> MetricReport {
    let entries = METRIC_KEYWORDS
        .iter()
        .map(|&(metric, keywords)| {
            let value = find_metric(lines, keywords);
            if value.is_none() {
                debug!(metric = %metric, "no matching financial line");
            }
            MetricValue { metric, value }
        })
        .collect();

    MetricReport { entries }
}

/// First value of the first line whose label contains one of the keywords.
fn find_metric(lines: &[FinancialLine], keywords: &[&str]) -> Option<Decimal> {
    for keyword in keywords {
        let keyword = keyword.to_lowercase();
        for line in lines {
            if line.label.to_lowercase().contains(&keyword) {
                if let Some(value) = line.values.first() {
                    return Some(*value);
                }
            }
        }
    }
    None
}
