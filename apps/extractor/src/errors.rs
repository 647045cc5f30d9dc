use std::path::PathBuf;

use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Every variant is fatal: the binary prints it to stderr and exits non-zero.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("No input file path supplied")]
    MissingArgument,

    #[error("Failed to read document '{}': {reason}", .path.display())]
    DocumentRead { path: PathBuf, reason: String },

    #[error("Extraction fault: {0}")]
    ExtractionFault(String),

    #[error("Invalid vocabulary file '{}': {reason}", .path.display())]
    Vocabulary { path: PathBuf, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ExtractError {
    pub fn document_read(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        ExtractError::DocumentRead {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

impl From<LlmError> for ExtractError {
    fn from(e: LlmError) -> Self {
        tracing::error!("Entity recognizer unavailable: {e}");
        ExtractError::ExtractionFault(format!("entity recognizer unavailable: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_read_message_names_path() {
        let err = ExtractError::document_read("/tmp/missing.pdf", "No such file or directory");
        let msg = err.to_string();
        assert!(msg.contains("/tmp/missing.pdf"));
        assert!(msg.contains("No such file"));
    }

    #[test]
    fn test_llm_error_becomes_extraction_fault() {
        let err: ExtractError = LlmError::EmptyContent.into();
        assert!(matches!(err, ExtractError::ExtractionFault(_)));
    }
}
