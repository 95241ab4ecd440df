//! The classifier: records in, violations out.

use globset::GlobSet;

use convcheck_core::config::CheckConfig;
use convcheck_core::errors::ConfigError;
use convcheck_core::types::{FileRecord, Role, Severity, ViolationKind, UNCLASSIFIABLE_RULE_ID};

use super::pairing::SiblingIndex;
use super::types::Violation;
use crate::rules::{Rule, RuleTable};

/// Checks file records against a rule table.
///
/// `classify` is a pure function of its input: it reads nothing but the
/// records, the table and the config it was built with.
pub struct Classifier<'t> {
    table: &'t RuleTable,
    config: CheckConfig,
    exempt: GlobSet,
}

impl<'t> Classifier<'t> {
    /// Build a classifier; fails only if the config's exempt globs do not compile.
    pub fn new(table: &'t RuleTable, config: &CheckConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            table,
            config: config.clone(),
            exempt: config.exempt_matcher()?,
        })
    }

    /// A classifier with no exemptions, overrides or disabled checks.
    pub fn with_defaults(table: &'t RuleTable) -> Self {
        Self {
            table,
            config: CheckConfig::default(),
            exempt: GlobSet::empty(),
        }
    }

    /// True if `record` matches an exempt glob and is never checked.
    pub fn is_exempt(&self, record: &FileRecord) -> bool {
        self.exempt.is_match(&record.path)
    }

    /// Number of records `classify` actually checks, i.e. the non-exempt ones.
    pub fn files_checked(&self, records: &[FileRecord]) -> usize {
        records.iter().filter(|r| !self.is_exempt(r)).count()
    }

    /// Check every record, in input order. Never fails: an unknown role
    /// becomes an `unclassifiable` violation and the rest are still checked.
    pub fn classify(&self, records: &[FileRecord]) -> Vec<Violation> {
        let siblings = SiblingIndex::build(self.table, records);
        let mut violations = Vec::new();
        let mut exempted = 0usize;

        for record in records {
            if self.is_exempt(record) {
                exempted += 1;
                tracing::debug!(path = %record.path, "exempt from checks");
                continue;
            }
            for violation in self.check_record(record, &siblings) {
                tracing::debug!(
                    path = %violation.file.path,
                    rule = %violation.rule_id,
                    kind = %violation.kind,
                    "violation"
                );
                violations.push(violation);
            }
        }

        tracing::info!(
            files_checked = records.len() - exempted,
            files_exempt = exempted,
            violation_count = violations.len(),
            "classification complete"
        );
        violations
    }

    fn check_record(&self, record: &FileRecord, siblings: &SiblingIndex<'_>) -> Vec<Violation> {
        let rule = match record.role().and_then(|role| self.table.rule_for(role)) {
            Some(rule) => rule,
            None => {
                let message = unclassifiable_message(record);
                return self
                    .emit(record, UNCLASSIFIABLE_RULE_ID, ViolationKind::Unclassifiable, message)
                    .into_iter()
                    .collect();
            }
        };

        let mut found = Vec::new();
        let directories = record.directories();

        if !rule.expected_directory.matches(&directories) {
            found.extend(self.emit(
                record,
                rule.id,
                ViolationKind::WrongDirectory,
                format!(
                    "{} is a {} file and belongs in {}",
                    record.file_name(),
                    rule.role,
                    rule.expected_directory.describe()
                ),
            ));
        }

        if let Some(required) = rule.required_extension {
            if record.extension() != Some(required) {
                let found_ext = match record.extension() {
                    Some(ext) => format!(".{ext}"),
                    None => "no extension".to_string(),
                };
                found.extend(self.emit(
                    record,
                    rule.id,
                    ViolationKind::WrongExtension,
                    format!("{} files must end in .{required}, found {found_ext}", rule.role),
                ));
            }
        }

        let stem = record.stem();
        if !rule.filename_pattern.is_match(stem) {
            found.extend(self.emit(
                record,
                rule.id,
                ViolationKind::BadFilename,
                format!(
                    "'{stem}' does not follow the {} naming convention {}",
                    rule.role,
                    rule.filename_pattern.example()
                ),
            ));
        }

        if let Some(paired) = rule.pairing {
            let base = rule.filename_pattern.base_name(stem);
            if !siblings.contains(record.parent(), paired, base) {
                found.extend(self.emit(
                    record,
                    rule.id,
                    ViolationKind::MissingPair,
                    self.missing_pair_message(record, paired, base),
                ));
            }
        }

        found
    }

    /// Applies disabled rules/checks and severity overrides.
    fn emit(
        &self,
        record: &FileRecord,
        rule_id: &str,
        kind: ViolationKind,
        message: String,
    ) -> Option<Violation> {
        if self.config.is_rule_disabled(rule_id) || self.config.is_check_disabled(kind) {
            return None;
        }
        let severity: Severity = self
            .config
            .severity_override(rule_id)
            .unwrap_or_else(|| kind.default_severity());
        Some(Violation {
            file: record.clone(),
            rule_id: rule_id.to_string(),
            kind,
            severity,
            message,
        })
    }

    fn missing_pair_message(&self, record: &FileRecord, paired: Role, base: &str) -> String {
        let expected = match self.table.rule_for(paired) {
            Some(partner) => expected_partner_name(partner, base),
            None => base.to_string(),
        };
        format!(
            "{} has no sibling {} file {}",
            record.file_name(),
            paired,
            expected
        )
    }
}

fn expected_partner_name(partner: &Rule, base: &str) -> String {
    let suffix = partner.filename_pattern.suffix();
    match partner.required_extension {
        Some(ext) => format!("{base}{suffix}.{ext}"),
        None => format!("{base}{suffix}"),
    }
}

fn unclassifiable_message(record: &FileRecord) -> String {
    let known: Vec<&str> = Role::all().iter().map(|r| r.as_str()).collect();
    let raw = record.declared_role.as_str();
    if raw.trim().is_empty() {
        format!(
            "no role could be determined for this file (expected one of {})",
            known.join(", ")
        )
    } else {
        format!("unknown role '{raw}' (expected one of {})", known.join(", "))
    }
}
