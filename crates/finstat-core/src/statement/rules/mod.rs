//! Rule-based extraction over recognized statement text.

pub mod amounts;
pub mod metrics;
pub mod narrative;
pub mod patterns;
pub mod tokens;

pub use amounts::{format_money, normalize_amount};
pub use metrics::{METRIC_KEYWORDS, resolve_metrics};
pub use narrative::split_sentences;
pub use tokens::{NumericToken, scan_tokens};
