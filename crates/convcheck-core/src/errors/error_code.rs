//! ConvcheckErrorCode trait for stable diagnostic codes.

/// Every error enum implements this to expose a stable code string that the
/// CLI prints in front of the message.
pub trait ConvcheckErrorCode {
    /// Returns the code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted diagnostic: `[ERROR_CODE] message`.
    fn diagnostic(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const INPUT_ERROR: &str = "INPUT_ERROR";
pub const SCAN_ERROR: &str = "SCAN_ERROR";
pub const REPORT_ERROR: &str = "REPORT_ERROR";
