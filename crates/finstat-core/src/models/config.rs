//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};

/// Main configuration for the finstat pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FinstatConfig {
    /// Source ingestion configuration.
    pub source: SourceConfig,

    /// Report output configuration.
    pub report: ReportConfig,
}

/// Recognized-text ingestion configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Treat blank recognized text as an upstream failure rather than a
    /// legitimately empty document.
    pub treat_blank_as_failure: bool,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            treat_blank_as_failure: true,
        }
    }
}

/// Summary report configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Maximum narrative sentences included in the text summary.
    pub narrative_limit: usize,

    /// Currency glyph used when rendering metric values.
    pub currency_symbol: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            narrative_limit: 10,
            currency_symbol: "€".to_string(),
        }
    }
}

impl FinstatConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}
