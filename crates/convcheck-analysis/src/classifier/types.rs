//! Violation type produced by the classifier.

use serde::{Deserialize, Serialize};

use convcheck_core::types::{FileRecord, Severity, ViolationKind};

/// A single failed check on a single file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub file: FileRecord,
    /// Rule id (the role's wire name), or `unclassifiable`.
    pub rule_id: String,
    pub kind: ViolationKind,
    pub severity: Severity,
    pub message: String,
}

impl Violation {
    pub fn path(&self) -> &str {
        &self.file.path
    }
}
