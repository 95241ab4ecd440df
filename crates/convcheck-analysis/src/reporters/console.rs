//! Console reporter: human-readable output with optional color codes.

use std::fmt::Write as _;

use convcheck_core::errors::ReportError;
use convcheck_core::types::Severity;

use super::{Report, Reporter};

/// Console reporter for human-readable terminal output.
pub struct ConsoleReporter {
    pub use_color: bool,
}

impl ConsoleReporter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn color_start(&self, severity: Severity) -> &'static str {
        if !self.use_color {
            return "";
        }
        match severity {
            Severity::Error => "\x1b[31m",   // red
            Severity::Warning => "\x1b[33m", // yellow
            Severity::Info => "\x1b[36m",    // cyan
        }
    }

    fn color_end(&self) -> &'static str {
        if self.use_color {
            "\x1b[0m"
        } else {
            ""
        }
    }

    fn bold(&self, text: &str) -> String {
        if self.use_color {
            format!("\x1b[1m{text}\x1b[0m")
        } else {
            text.to_string()
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Reporter for ConsoleReporter {
    fn name(&self) -> &'static str {
        "console"
    }

    fn generate(&self, report: &Report) -> Result<String, ReportError> {
        let mut output = String::new();
        let mut current_path: Option<&str> = None;

        for violation in &report.violations {
            if current_path != Some(violation.path()) {
                if current_path.is_some() {
                    output.push('\n');
                }
                let _ = writeln!(output, "{}", self.bold(violation.path()));
                current_path = Some(violation.path());
            }
            let _ = writeln!(
                output,
                "  {}{}{}[{}/{}]: {}",
                self.color_start(violation.severity),
                violation.severity,
                self.color_end(),
                violation.rule_id,
                violation.kind,
                violation.message,
            );
        }

        if report.is_clean() {
            let _ = writeln!(
                output,
                "No convention violations in {} files checked",
                report.files_checked
            );
        } else {
            let total = report.violations.len();
            let _ = writeln!(
                output,
                "\n{} violation{} ({} errors, {} warnings, {} info) in {} of {} files checked",
                total,
                if total == 1 { "" } else { "s" },
                report.count(Severity::Error),
                report.count(Severity::Warning),
                report.count(Severity::Info),
                report.files_with_violations(),
                report.files_checked,
            );
        }

        Ok(output)
    }
}
