//! Classifier configuration.

use std::collections::BTreeMap;

use globset::{Glob, GlobSet, GlobSetBuilder};
use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::types::{Role, Severity, ViolationKind, UNCLASSIFIABLE_RULE_ID};

/// Configuration for the classifier.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CheckConfig {
    /// Rule ids whose violations are dropped.
    pub disabled_rules: Vec<String>,
    /// Violation kinds that are dropped, e.g. `missing-pair`.
    pub disabled_checks: Vec<String>,
    /// Globs over record paths; matching records are not checked at all.
    pub exempt: Vec<String>,
    /// Lowest severity that makes the run fail. Default: `warning`.
    pub fail_on: Option<String>,
    /// Per-rule-id severity overrides.
    pub severity: BTreeMap<String, String>,
}

impl CheckConfig {
    /// Returns the effective fail-on threshold, defaulting to warning.
    pub fn effective_fail_on(&self) -> Severity {
        self.fail_on
            .as_deref()
            .and_then(Severity::parse)
            .unwrap_or(Severity::Warning)
    }

    pub fn is_rule_disabled(&self, rule_id: &str) -> bool {
        self.disabled_rules.iter().any(|r| r == rule_id)
    }

    pub fn is_check_disabled(&self, kind: ViolationKind) -> bool {
        self.disabled_checks.iter().any(|k| k == kind.as_str())
    }

    /// Severity override for a rule id, if one is configured and valid.
    pub fn severity_override(&self, rule_id: &str) -> Option<Severity> {
        self.severity.get(rule_id).and_then(|s| Severity::parse(s))
    }

    /// Compile the exempt globs. `/` is a literal separator, so `*` stays
    /// inside one directory and `**` spans several.
    pub fn exempt_matcher(&self) -> Result<GlobSet, ConfigError> {
        let mut builder = GlobSetBuilder::new();
        for pattern in &self.exempt {
            let glob = compile_glob(pattern).map_err(|e| ConfigError::InvalidValue {
                field: "check.exempt".to_string(),
                message: format!("'{pattern}': {e}"),
            })?;
            builder.add(glob);
        }
        builder.build().map_err(|e| ConfigError::InvalidValue {
            field: "check.exempt".to_string(),
            message: e.to_string(),
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref fail_on) = self.fail_on {
            if Severity::parse(fail_on).is_none() {
                return Err(ConfigError::ValidationFailed {
                    field: "check.fail_on".to_string(),
                    message: format!("'{fail_on}' is not one of error, warning, info"),
                });
            }
        }
        for rule_id in &self.disabled_rules {
            if !is_known_rule_id(rule_id) {
                return Err(ConfigError::ValidationFailed {
                    field: "check.disabled_rules".to_string(),
                    message: format!("unknown rule id '{rule_id}'"),
                });
            }
        }
        for (rule_id, level) in &self.severity {
            if !is_known_rule_id(rule_id) {
                return Err(ConfigError::ValidationFailed {
                    field: "check.severity".to_string(),
                    message: format!("unknown rule id '{rule_id}'"),
                });
            }
            if Severity::parse(level).is_none() {
                return Err(ConfigError::ValidationFailed {
                    field: format!("check.severity.{rule_id}"),
                    message: format!("'{level}' is not one of error, warning, info"),
                });
            }
        }
        for check in &self.disabled_checks {
            if ViolationKind::parse(check).is_none() {
                return Err(ConfigError::ValidationFailed {
                    field: "check.disabled_checks".to_string(),
                    message: format!("unknown check '{check}'"),
                });
            }
        }
        self.exempt_matcher().map(|_| ())
    }
}

fn is_known_rule_id(rule_id: &str) -> bool {
    rule_id == UNCLASSIFIABLE_RULE_ID || Role::all().iter().any(|r| r.as_str() == rule_id)
}

fn compile_glob(pattern: &str) -> Result<Glob, globset::Error> {
    globset::GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
}
