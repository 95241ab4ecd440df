//! Reporters: output formats for a checked set of files.
//!
//! 3 reporter formats: console, JSON, GitHub Code Quality.

pub mod console;
pub mod github;
pub mod json;

use convcheck_core::config::report_config::REPORT_FORMATS;
use convcheck_core::errors::ReportError;
use convcheck_core::types::Severity;

use crate::classifier::Violation;
use crate::rules::RuleTable;

/// Violations in report order, plus the count of files that were checked.
#[derive(Debug, Clone)]
pub struct Report {
    pub files_checked: usize,
    pub violations: Vec<Violation>,
}

impl Report {
    /// Orders violations by file path, then rule position in `table`, then
    /// check kind. The sort is stable, so ties keep their input order.
    pub fn new(table: &RuleTable, files_checked: usize, mut violations: Vec<Violation>) -> Self {
        violations.sort_by(|a, b| {
            a.file
                .path
                .cmp(&b.file.path)
                .then_with(|| table.position(&a.rule_id).cmp(&table.position(&b.rule_id)))
                .then_with(|| a.kind.cmp(&b.kind))
        });
        Self {
            files_checked,
            violations,
        }
    }

    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    /// True if any violation is at least as severe as `threshold`.
    pub fn fails(&self, threshold: Severity) -> bool {
        self.violations.iter().any(|v| v.severity.meets(threshold))
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.violations.iter().filter(|v| v.severity == severity).count()
    }

    /// Number of distinct files with at least one violation.
    pub fn files_with_violations(&self) -> usize {
        let mut paths: Vec<&str> = self.violations.iter().map(|v| v.path()).collect();
        paths.dedup();
        paths.len()
    }
}

/// Trait for report generation.
pub trait Reporter: Send + Sync {
    fn name(&self) -> &'static str;
    fn generate(&self, report: &Report) -> Result<String, ReportError>;
}

/// Create a reporter by format name.
pub fn create_reporter(format: &str, use_color: bool) -> Option<Box<dyn Reporter>> {
    match format {
        "console" => Some(Box::new(console::ConsoleReporter::new(use_color))),
        "json" => Some(Box::new(json::JsonReporter)),
        "github" => Some(Box::new(github::GitHubCodeQualityReporter::new())),
        _ => None,
    }
}

/// Like `create_reporter`, but an unknown format is an error naming the alternatives.
pub fn reporter_for(format: &str, use_color: bool) -> Result<Box<dyn Reporter>, ReportError> {
    create_reporter(format, use_color).ok_or_else(|| ReportError::UnknownFormat {
        format: format.to_string(),
        available: available_formats().join(", "),
    })
}

/// List all available reporter format names.
pub fn available_formats() -> &'static [&'static str] {
    REPORT_FORMATS
}
