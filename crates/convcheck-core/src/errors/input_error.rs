//! Input errors: malformed `PATH=ROLE` arguments and unreadable manifests.
//!
//! An unknown role is *not* an input error. It travels through as
//! `DeclaredRole::Unknown` and is reported as a violation.

use super::error_code::{self, ConvcheckErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Malformed file argument '{arg}': expected PATH=ROLE")]
    MalformedArgument { arg: String },

    #[error("Cannot read manifest {path}: {message}")]
    ManifestRead { path: String, message: String },

    #[error("Manifest parse error in {path}: {message}")]
    ManifestParse { path: String, message: String },

    #[error("Unsupported manifest format for {path}: expected .json or .toml")]
    UnsupportedManifest { path: String },
}

impl ConvcheckErrorCode for InputError {
    fn error_code(&self) -> &'static str {
        error_code::INPUT_ERROR
    }
}
