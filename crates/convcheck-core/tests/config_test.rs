//! Tests for the convcheck configuration system.

use std::sync::Mutex;

use convcheck_core::config::{CliOverrides, ConvcheckConfig};
use convcheck_core::errors::{ConfigError, ConvcheckErrorCode};
use convcheck_core::types::{Severity, ViolationKind};

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Clear all CONVCHECK_ env vars and point HOME at an empty directory so the
/// developer's own user config never leaks in.
fn isolate_env(home: &std::path::Path) {
    for key in [
        "CONVCHECK_REPORT_FORMAT",
        "CONVCHECK_REPORT_COLOR",
        "CONVCHECK_CHECK_FAIL_ON",
        "CONVCHECK_SCAN_FOLLOW_SYMLINKS",
    ] {
        std::env::remove_var(key);
    }
    std::env::set_var("HOME", home);
    std::env::remove_var("USERPROFILE");
}

#[test]
fn test_defaults_without_any_file() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    let project = tempdir();
    let config = ConvcheckConfig::load(project.path(), None).unwrap();

    assert_eq!(config.report.effective_format(), "console");
    assert!(config.report.effective_color());
    assert_eq!(config.check.effective_fail_on(), Severity::Warning);
    assert!(!config.scan.effective_follow_symlinks());
    assert!(config.check.exempt.is_empty());
}

#[test]
fn test_layered_resolution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    let user_dir = home.path().join(".convcheck");
    std::fs::create_dir_all(&user_dir).unwrap();
    std::fs::write(
        user_dir.join("config.toml"),
        r#"
[report]
format = "json"
color = false

[check]
disabled_checks = ["missing-pair"]
"#,
    )
    .unwrap();

    let project = tempdir();
    std::fs::write(
        project.path().join("convcheck.toml"),
        r#"
[report]
format = "github"

[check]
fail_on = "error"
exempt = ["Generated/**"]
"#,
    )
    .unwrap();

    std::env::set_var("CONVCHECK_CHECK_FAIL_ON", "info");

    let cli = CliOverrides {
        report_format: Some("console".to_string()),
        exempt: vec!["Vendor/**".to_string()],
        ..Default::default()
    };
    let config = ConvcheckConfig::load(project.path(), Some(&cli)).unwrap();
    std::env::remove_var("CONVCHECK_CHECK_FAIL_ON");

    // CLI beats project beats user
    assert_eq!(config.report.effective_format(), "console");
    // user value survives where nothing above overrides it
    assert!(!config.report.effective_color());
    assert!(config.check.is_check_disabled(ViolationKind::MissingPair));
    // env beats project
    assert_eq!(config.check.effective_fail_on(), Severity::Info);
    // CLI exempt globs are appended
    assert_eq!(config.check.exempt, vec!["Generated/**", "Vendor/**"]);
}

#[test]
fn test_explicit_config_file_replaces_project_lookup() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    let project = tempdir();
    std::fs::write(
        project.path().join("convcheck.toml"),
        "[report]\nformat = \"github\"\n",
    )
    .unwrap();
    let other = tempdir();
    let explicit = other.path().join("ci.toml");
    std::fs::write(&explicit, "[report]\nformat = \"json\"\n").unwrap();

    let cli = CliOverrides {
        config_file: Some(explicit),
        ..Default::default()
    };
    let config = ConvcheckConfig::load(project.path(), Some(&cli)).unwrap();
    assert_eq!(config.report.effective_format(), "json");
}

#[test]
fn test_missing_explicit_config_is_an_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    let project = tempdir();
    let cli = CliOverrides {
        config_file: Some(project.path().join("nope.toml")),
        ..Default::default()
    };
    let err = ConvcheckConfig::load(project.path(), Some(&cli)).unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound { .. }));
    assert!(err.diagnostic().starts_with("[CONFIG_ERROR]"));
}

#[test]
fn test_invalid_toml_in_project_config() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    let project = tempdir();
    std::fs::write(project.path().join("convcheck.toml"), "[check\nfail_on = ").unwrap();
    let err = ConvcheckConfig::load(project.path(), None).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_invalid_env_bool() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    std::env::set_var("CONVCHECK_REPORT_COLOR", "sometimes");
    let project = tempdir();
    let result = ConvcheckConfig::load(project.path(), None);
    std::env::remove_var("CONVCHECK_REPORT_COLOR");

    assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
}

#[test]
fn test_validation_rejects_unknown_values() {
    let cases = [
        "[report]\nformat = \"xml\"\n",
        "[check]\nfail_on = \"fatal\"\n",
        "[check]\ndisabled_rules = [\"widget\"]\n",
        "[check]\ndisabled_checks = [\"too-long\"]\n",
        "[check.severity]\nwidget = \"error\"\n",
        "[check.severity]\nview = \"loud\"\n",
        "[check]\nexempt = [\"Generated/[\"]\n",
    ];
    for case in cases {
        let config = ConvcheckConfig::from_toml(case).unwrap();
        assert!(
            ConvcheckConfig::validate(&config).is_err(),
            "expected validation failure for {case:?}"
        );
    }
}

#[test]
fn test_severity_override_and_disabled_rules() {
    let config = ConvcheckConfig::from_toml(
        r#"
[check]
disabled_rules = ["resource", "unclassifiable"]

[check.severity]
view-model = "error"
"#,
    )
    .unwrap();
    ConvcheckConfig::validate(&config).unwrap();

    assert!(config.check.is_rule_disabled("resource"));
    assert!(config.check.is_rule_disabled("unclassifiable"));
    assert!(!config.check.is_rule_disabled("view"));
    assert_eq!(config.check.severity_override("view-model"), Some(Severity::Error));
    assert_eq!(config.check.severity_override("view"), None);
}

#[test]
fn test_exempt_globs_respect_separators() {
    let config = ConvcheckConfig::from_toml(
        "[check]\nexempt = [\"Generated/*\", \"**/Previews/**\"]\n",
    )
    .unwrap();
    let matcher = config.check.exempt_matcher().unwrap();

    assert!(matcher.is_match("Generated/Assets.swift"));
    assert!(!matcher.is_match("Generated/Nested/Assets.swift"));
    assert!(matcher.is_match("Features/Login/Previews/LoginView+Preview.swift"));
    assert!(!matcher.is_match("Features/Login/LoginView.swift"));
}

#[test]
fn test_unknown_keys_are_ignored() {
    let config = ConvcheckConfig::from_toml(
        "future_section = 1\n[report]\nformat = \"json\"\nshiny = true\n",
    )
    .unwrap();
    assert_eq!(config.report.effective_format(), "json");
}

#[test]
fn test_to_toml_round_trips() {
    let config = ConvcheckConfig::from_toml(
        "[check]\nfail_on = \"error\"\n[check.severity]\nview = \"info\"\n",
    )
    .unwrap();
    let rendered = config.to_toml().unwrap();
    let reparsed = ConvcheckConfig::from_toml(&rendered).unwrap();
    assert_eq!(reparsed.check.effective_fail_on(), Severity::Error);
    assert_eq!(reparsed.check.severity_override("view"), Some(Severity::Info));
}
