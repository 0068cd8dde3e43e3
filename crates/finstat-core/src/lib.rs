//! Core library for financial statement OCR text processing.
//!
//! This crate provides:
//! - Recognized-text ingestion with distinct upstream-failure kinds
//! - Financial line extraction (money-token scanning and normalization)
//! - Key metric resolution (turnover, profit, assets, stocks, debtors,
//!   cash, net assets) by ordered keyword matching
//! - Narrative sentence splitting for report output

pub mod error;
pub mod models;
pub mod source;
pub mod statement;

pub use error::{FinstatError, Result, SourceError};
pub use models::config::FinstatConfig;
pub use models::statement::{FinancialLine, MetricName, MetricReport, Statement};
pub use source::SourceReader;
pub use statement::{RuleStatementParser, StatementParser};
