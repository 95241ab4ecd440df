//! Scanner errors.

use super::error_code::{self, ConvcheckErrorCode};

/// Errors that stop a directory scan. Unreadable entries below the root are
/// logged, collected in `ScanResult::errors` and skipped.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("Scan root not found or not a directory: {path}")]
    RootNotFound { path: String },
}

impl ConvcheckErrorCode for ScanError {
    fn error_code(&self) -> &'static str {
        error_code::SCAN_ERROR
    }
}
