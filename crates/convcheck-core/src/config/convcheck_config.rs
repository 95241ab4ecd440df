//! Top-level convcheck configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::report_config::REPORT_FORMATS;
use super::{CheckConfig, ReportConfig, ScanConfig};
use crate::errors::ConfigError;

/// Name of the project config file looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "convcheck.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`CONVCHECK_*`)
/// 3. Project config (`convcheck.toml` in the project root, or `--config`)
/// 4. User config (`~/.convcheck/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ConvcheckConfig {
    pub check: CheckConfig,
    pub scan: ScanConfig,
    pub report: ReportConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    /// Explicit project config file; replaces the `convcheck.toml` lookup.
    pub config_file: Option<PathBuf>,
    pub report_format: Option<String>,
    pub report_color: Option<bool>,
    pub fail_on: Option<String>,
    /// Appended to `check.exempt` rather than replacing it.
    pub exempt: Vec<String>,
}

impl ConvcheckConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Lowest priority: user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(path = %user_config_path.display(), error = %e, "skipping user config");
                    }
                }
            }
        }

        // Project config: an explicit --config must exist, the default is optional
        match cli_overrides.and_then(|cli| cli.config_file.as_deref()) {
            Some(explicit) => {
                if !explicit.is_file() {
                    return Err(ConfigError::FileNotFound {
                        path: explicit.display().to_string(),
                    });
                }
                Self::merge_toml_file(&mut config, explicit)?;
            }
            None => {
                let project_config_path = root.join(PROJECT_CONFIG_FILE);
                if project_config_path.exists() {
                    Self::merge_toml_file(&mut config, &project_config_path)?;
                }
            }
        }

        Self::apply_env_overrides(&mut config)?;

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        tracing::debug!(root = %root.display(), "configuration resolved");
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &ConvcheckConfig) -> Result<(), ConfigError> {
        if let Some(ref format) = config.report.format {
            if !REPORT_FORMATS.contains(&format.as_str()) {
                return Err(ConfigError::ValidationFailed {
                    field: "report.format".to_string(),
                    message: format!(
                        "'{format}' is not one of {}",
                        REPORT_FORMATS.join(", ")
                    ),
                });
            }
        }
        config.check.validate()
    }

    /// Returns the user config path: `~/.convcheck/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".convcheck").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut ConvcheckConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: ConvcheckConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`. Options override only when `Some`,
    /// collections only when non-empty.
    fn merge(base: &mut ConvcheckConfig, other: &ConvcheckConfig) {
        // Check
        if !other.check.disabled_rules.is_empty() {
            base.check.disabled_rules = other.check.disabled_rules.clone();
        }
        if !other.check.disabled_checks.is_empty() {
            base.check.disabled_checks = other.check.disabled_checks.clone();
        }
        if !other.check.exempt.is_empty() {
            base.check.exempt = other.check.exempt.clone();
        }
        if other.check.fail_on.is_some() {
            base.check.fail_on = other.check.fail_on.clone();
        }
        for (rule_id, level) in &other.check.severity {
            base.check.severity.insert(rule_id.clone(), level.clone());
        }

        // Scan
        if !other.scan.extra_ignore.is_empty() {
            base.scan.extra_ignore = other.scan.extra_ignore.clone();
        }
        if other.scan.follow_symlinks.is_some() {
            base.scan.follow_symlinks = other.scan.follow_symlinks;
        }
        if other.scan.include_hidden.is_some() {
            base.scan.include_hidden = other.scan.include_hidden;
        }

        // Report
        if other.report.format.is_some() {
            base.report.format = other.report.format.clone();
        }
        if other.report.color.is_some() {
            base.report.color = other.report.color;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `CONVCHECK_<SECTION>_<KEY>`.
    fn apply_env_overrides(config: &mut ConvcheckConfig) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var("CONVCHECK_REPORT_FORMAT") {
            config.report.format = Some(val);
        }
        if let Ok(val) = std::env::var("CONVCHECK_REPORT_COLOR") {
            config.report.color = Some(parse_env_bool("CONVCHECK_REPORT_COLOR", &val)?);
        }
        if let Ok(val) = std::env::var("CONVCHECK_CHECK_FAIL_ON") {
            config.check.fail_on = Some(val);
        }
        if let Ok(val) = std::env::var("CONVCHECK_SCAN_FOLLOW_SYMLINKS") {
            config.scan.follow_symlinks =
                Some(parse_env_bool("CONVCHECK_SCAN_FOLLOW_SYMLINKS", &val)?);
        }
        Ok(())
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut ConvcheckConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.report_format {
            config.report.format = Some(v.clone());
        }
        if let Some(v) = cli.report_color {
            config.report.color = Some(v);
        }
        if let Some(ref v) = cli.fail_on {
            config.check.fail_on = Some(v.clone());
        }
        config.check.exempt.extend(cli.exempt.iter().cloned());
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn parse_env_bool(name: &str, val: &str) -> Result<bool, ConfigError> {
    match val.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            field: name.to_string(),
            message: format!("'{val}' is not a boolean"),
        }),
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
