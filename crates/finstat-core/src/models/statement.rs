//! Statement data models: financial lines, metrics, and the per-document
//! extraction result.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A line of recognized text that carried at least one numeric value.
///
/// Immutable once constructed; the raw line is kept verbatim for
/// traceability in exports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialLine {
    /// The source line, exactly as recognized.
    pub raw_line: String,

    /// Trimmed text preceding the first numeric token; may be empty for a
    /// fully numeric line. Case and punctuation are preserved.
    pub label: String,

    /// Parsed values in left-to-right order. Never empty: a line whose
    /// tokens all fail to parse is discarded instead of retained.
    pub values: Vec<Decimal>,
}

/// The fixed set of named metrics resolved from a statement.
///
/// Declaration order is canonical: it is the report output order and the
/// order in which metrics are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricName {
    Turnover,
    ProfitForTheYear,
    TangibleAssets,
    Stocks,
    Debtors,
    Cash,
    NetAssets,
}

impl MetricName {
    /// All metrics in canonical order.
    pub const ALL: [MetricName; 7] = [
        MetricName::Turnover,
        MetricName::ProfitForTheYear,
        MetricName::TangibleAssets,
        MetricName::Stocks,
        MetricName::Debtors,
        MetricName::Cash,
        MetricName::NetAssets,
    ];

    /// Human-readable name used in reports.
    pub fn display_name(&self) -> &'static str {
        match self {
            MetricName::Turnover => "Turnover",
            MetricName::ProfitForTheYear => "Profit for the year",
            MetricName::TangibleAssets => "Tangible assets",
            MetricName::Stocks => "Stocks",
            MetricName::Debtors => "Debtors",
            MetricName::Cash => "Cash",
            MetricName::NetAssets => "Net assets",
        }
    }
}

impl std::fmt::Display for MetricName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A resolved metric: the value from the first matching financial line, or
/// `None` when no line matched any of the metric's keywords.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricValue {
    /// Which metric this entry is for.
    pub metric: MetricName,

    /// Resolved value; absent is explicit, never zero.
    pub value: Option<Decimal>,
}

/// Ordered metric results, one entry per [`MetricName`] in canonical order.
///
/// Every metric is always present, matched or not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricReport {
    /// Entries in canonical metric order.
    pub entries: Vec<MetricValue>,
}

impl MetricReport {
    /// Look up a single metric's value.
    pub fn get(&self, metric: MetricName) -> Option<Decimal> {
        self.entries
            .iter()
            .find(|e| e.metric == metric)
            .and_then(|e| e.value)
    }

    /// Number of metrics that resolved to a value.
    pub fn available_count(&self) -> usize {
        self.entries.iter().filter(|e| e.value.is_some()).count()
    }
}

/// Complete extraction result for one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    /// Narrative sentences in document order.
    pub narrative: Vec<String>,

    /// Financial lines in document order.
    pub lines: Vec<FinancialLine>,

    /// Resolved key metrics.
    pub metrics: MetricReport,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;

    #[test]
    fn test_canonical_metric_order() {
        let names: Vec<&str> = MetricName::ALL.iter().map(|m| m.display_name()).collect();
        assert_eq!(
            names,
            vec![
                "Turnover",
                "Profit for the year",
                "Tangible assets",
                "Stocks",
                "Debtors",
                "Cash",
                "Net assets",
            ]
        );
    }

    #[test]
    fn test_report_lookup() {
        let report = MetricReport {
            entries: MetricName::ALL
                .iter()
                .map(|&metric| MetricValue {
                    metric,
                    value: (metric == MetricName::Turnover).then(|| Decimal::from(100)),
                })
                .collect(),
        };

        assert_eq!(report.get(MetricName::Turnover), Some(Decimal::from(100)));
        assert_eq!(report.get(MetricName::Cash), None);
        assert_eq!(report.available_count(), 1);
    }

    #[test]
    fn test_metric_name_serializes_snake_case() {
        let json = serde_json::to_string(&MetricName::ProfitForTheYear).unwrap();
        assert_eq!(json, r#""profit_for_the_year""#);
    }
}
