//! The kinds of check a record can fail.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Severity;

/// Declared in check order: a record is checked for directory, extension,
/// filename and pairing in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViolationKind {
    WrongDirectory,
    WrongExtension,
    BadFilename,
    MissingPair,
    Unclassifiable,
}

impl ViolationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WrongDirectory => "wrong-directory",
            Self::WrongExtension => "wrong-extension",
            Self::BadFilename => "bad-filename",
            Self::MissingPair => "missing-pair",
            Self::Unclassifiable => "unclassifiable",
        }
    }

    pub fn all() -> &'static [ViolationKind] {
        &[
            Self::WrongDirectory,
            Self::WrongExtension,
            Self::BadFilename,
            Self::MissingPair,
            Self::Unclassifiable,
        ]
    }

    pub fn parse(s: &str) -> Option<ViolationKind> {
        Self::all().iter().copied().find(|k| k.as_str() == s.trim())
    }

    pub fn default_severity(&self) -> Severity {
        match self {
            Self::MissingPair => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
