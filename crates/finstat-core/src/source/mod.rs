//! Recognized-text ingestion.
//!
//! Rasterization and OCR run upstream of this crate; what arrives here is
//! the concatenated recognized text of a whole document, page boundaries
//! marked only by newlines. This module reads that text and surfaces
//! upstream failures as named kinds instead of letting a broken stage
//! masquerade as a legitimately blank document.

use std::path::Path;

use tracing::{debug, warn};

use crate::error::SourceError;
use crate::models::config::SourceConfig;

/// Result type for source operations.
pub type Result<T> = std::result::Result<T, SourceError>;

/// Reads recognized text produced by the upstream OCR stage.
pub struct SourceReader {
    treat_blank_as_failure: bool,
}

impl SourceReader {
    pub fn new() -> Self {
        Self {
            treat_blank_as_failure: true,
        }
    }

    pub fn from_config(config: &SourceConfig) -> Self {
        Self {
            treat_blank_as_failure: config.treat_blank_as_failure,
        }
    }

    /// Allow blank recognized text to pass through as an empty document.
    pub fn with_blank_allowed(mut self, allowed: bool) -> Self {
        self.treat_blank_as_failure = !allowed;
        self
    }

    /// Read the recognized text of a document from a file.
    ///
    /// A missing file and unreadable output are distinct failure kinds;
    /// blank text is a third, unless blanks are explicitly allowed.
    pub fn read(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(SourceError::DocumentNotFound(path.to_path_buf()));
        }

        let text = std::fs::read_to_string(path)
            .map_err(|e| SourceError::RecognitionUnavailable(e.to_string()))?;

        debug!("read {} characters from {}", text.len(), path.display());

        if text.trim().is_empty() && self.treat_blank_as_failure {
            warn!("recognized text is blank: {}", path.display());
            return Err(SourceError::EmptyRecognition(path.to_path_buf()));
        }

        Ok(text)
    }
}

impl Default for SourceReader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_document_is_named_failure() {
        let err = SourceReader::new()
            .read(Path::new("/nonexistent/statement.txt"))
            .unwrap_err();
        assert!(matches!(err, SourceError::DocumentNotFound(_)));
    }

    #[test]
    fn test_blank_text_is_failure_by_default() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "   ").unwrap();

        let err = SourceReader::new().read(file.path()).unwrap_err();
        assert!(matches!(err, SourceError::EmptyRecognition(_)));
    }

    #[test]
    fn test_blank_text_allowed_when_configured() {
        let file = tempfile::NamedTempFile::new().unwrap();

        let text = SourceReader::new()
            .with_blank_allowed(true)
            .read(file.path())
            .unwrap();
        assert!(text.is_empty());
    }

    #[test]
    fn test_reads_text_verbatim() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Turnover 1,234\n").unwrap();

        let text = SourceReader::new().read(file.path()).unwrap();
        assert_eq!(text, "Turnover 1,234\n");
    }
}
