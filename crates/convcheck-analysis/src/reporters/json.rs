//! JSON reporter: the full report as a single pretty-printed document.

use serde::Serialize;

use convcheck_core::errors::ReportError;

use super::{Report, Reporter};
use crate::classifier::Violation;

pub struct JsonReporter;

#[derive(Serialize)]
struct JsonReport<'a> {
    files_checked: usize,
    violation_count: usize,
    violations: &'a [Violation],
}

impl Reporter for JsonReporter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn generate(&self, report: &Report) -> Result<String, ReportError> {
        let doc = JsonReport {
            files_checked: report.files_checked,
            violation_count: report.violations.len(),
            violations: &report.violations,
        };
        Ok(serde_json::to_string_pretty(&doc)?)
    }
}
