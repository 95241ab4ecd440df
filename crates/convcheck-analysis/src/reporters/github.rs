//! GitHub Code Quality reporter: JSON annotations per GitHub's documented schema.
//!
//! Layout violations have no line, so every annotation points at line 1.

use serde_json::{json, Value};

use convcheck_core::errors::ReportError;
use convcheck_core::types::Severity;

use super::{Report, Reporter};

/// GitHub Code Quality reporter.
pub struct GitHubCodeQualityReporter;

impl GitHubCodeQualityReporter {
    pub fn new() -> Self {
        Self
    }

    fn severity_to_github(severity: Severity) -> &'static str {
        match severity {
            Severity::Error => "failure",
            Severity::Warning => "warning",
            Severity::Info => "notice",
        }
    }
}

impl Default for GitHubCodeQualityReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for GitHubCodeQualityReporter {
    fn name(&self) -> &'static str {
        "github"
    }

    fn generate(&self, report: &Report) -> Result<String, ReportError> {
        let annotations: Vec<Value> = report
            .violations
            .iter()
            .map(|violation| {
                json!({
                    "path": violation.file.path,
                    "start_line": 1,
                    "end_line": 1,
                    "annotation_level": Self::severity_to_github(violation.severity),
                    "message": violation.message,
                    "title": format!("[{}] {}", violation.rule_id, violation.kind),
                })
            })
            .collect();

        Ok(serde_json::to_string_pretty(&annotations)?)
    }
}
