//! Reporter errors.

use super::error_code::{self, ConvcheckErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Unknown report format '{format}' (available: {available})")]
    UnknownFormat { format: String, available: String },

    #[error("Report serialization failed: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for ReportError {
    fn from(e: serde_json::Error) -> Self {
        ReportError::Serialization(e.to_string())
    }
}

impl ConvcheckErrorCode for ReportError {
    fn error_code(&self) -> &'static str {
        error_code::REPORT_ERROR
    }
}
