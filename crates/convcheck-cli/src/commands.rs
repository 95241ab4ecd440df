//! Command handlers.
//!
//! Parse/match CLI inputs here and delegate to `convcheck-analysis`. Every
//! handler returns the process exit code; errors bubble up to `main`.

use std::io::IsTerminal;
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use serde::Serialize;

use convcheck_analysis::classifier::Classifier;
use convcheck_analysis::manifest;
use convcheck_analysis::reporters::{self, Report};
use convcheck_analysis::rules::{Rule, RuleTable};
use convcheck_analysis::scanner::{ScanOptions, Scanner};
use convcheck_core::config::{CliOverrides, ConvcheckConfig};
use convcheck_core::errors::ConvcheckErrorCode;
use convcheck_core::types::FileRecord;

use crate::cli::{Cli, Commands, Format};

/// No violation at or above `fail_on`.
pub const EXIT_CLEAN: u8 = 0;
/// At least one failing violation.
pub const EXIT_VIOLATIONS: u8 = 1;
/// Usage, input, config or I/O error.
pub const EXIT_ERROR: u8 = 2;

pub fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    match &cli.command {
        Commands::Check {
            files,
            manifest: manifest_path,
            root,
        } => {
            let config = load_config(cli, root)?;
            let mut records = manifest::parse_args(files).map_err(diagnostic)?;
            if let Some(path) = manifest_path {
                records.extend(manifest::load(path).map_err(diagnostic)?);
            }
            check_and_report(&config, &records)
        }
        Commands::Scan { dir } => {
            let config = load_config(cli, dir)?;
            let options = ScanOptions::from_config(dir, &config.scan);
            let result = Scanner::new(options)
                .scan()
                .map_err(diagnostic)
                .with_context(|| format!("scanning {}", dir.display()))?;
            for error in &result.errors {
                eprintln!("warning: {error}");
            }
            check_and_report(&config, &result.records)
        }
        Commands::Rules { root } => {
            let config = load_config(cli, root)?;
            print_rules(config.report.effective_format() == Format::Json.as_str())?;
            Ok(ExitCode::from(EXIT_CLEAN))
        }
        Commands::Config { root } => {
            let config = load_config(cli, root)?;
            print!("{}", config.to_toml().map_err(diagnostic)?);
            Ok(ExitCode::from(EXIT_CLEAN))
        }
    }
}

fn overrides(cli: &Cli) -> CliOverrides {
    CliOverrides {
        config_file: cli.config.clone(),
        report_format: cli.format.map(|f| f.as_str().to_string()),
        report_color: cli.no_color.then_some(false),
        fail_on: cli.fail_on.map(|f| f.as_str().to_string()),
        exempt: cli.exempt.clone(),
    }
}

fn load_config(cli: &Cli, root: &Path) -> anyhow::Result<ConvcheckConfig> {
    ConvcheckConfig::load(root, Some(&overrides(cli)))
        .map_err(diagnostic)
        .context("loading configuration")
}

fn check_and_report(config: &ConvcheckConfig, records: &[FileRecord]) -> anyhow::Result<ExitCode> {
    let table = RuleTable::standard();
    let classifier = Classifier::new(table, &config.check).map_err(diagnostic)?;
    let violations = classifier.classify(records);
    let report = Report::new(table, classifier.files_checked(records), violations);

    let use_color = config.report.effective_color() && std::io::stdout().is_terminal();
    let reporter =
        reporters::reporter_for(config.report.effective_format(), use_color).map_err(diagnostic)?;
    let output = reporter.generate(&report).map_err(diagnostic)?;
    print!("{output}");
    if !output.ends_with('\n') {
        println!();
    }

    let fail_on = config.check.effective_fail_on();
    tracing::debug!(
        format = reporter.name(),
        violation_count = report.violations.len(),
        fail_on = %fail_on,
        "report written"
    );
    if report.fails(fail_on) {
        Ok(ExitCode::from(EXIT_VIOLATIONS))
    } else {
        Ok(ExitCode::from(EXIT_CLEAN))
    }
}

#[derive(Serialize)]
struct RuleRow {
    id: &'static str,
    role: String,
    directory: String,
    pattern: String,
    extension: Option<&'static str>,
    pairing: Option<String>,
}

impl From<&Rule> for RuleRow {
    fn from(rule: &Rule) -> Self {
        Self {
            id: rule.id,
            role: rule.role.to_string(),
            directory: rule.expected_directory.to_string(),
            pattern: rule.filename_pattern.as_str().to_string(),
            extension: rule.required_extension,
            pairing: rule.pairing.map(|r| r.to_string()),
        }
    }
}

fn print_rules(json: bool) -> anyhow::Result<()> {
    let rows: Vec<RuleRow> = RuleTable::standard().rules().iter().map(RuleRow::from).collect();
    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }
    for row in &rows {
        println!(
            "{:<16} {:<28} {:<48} {:<6} {}",
            row.id,
            row.directory,
            row.pattern,
            row.extension.unwrap_or("*"),
            row.pairing.as_deref().unwrap_or("-")
        );
    }
    Ok(())
}

/// Turn a subsystem error into its `[CODE] message` form.
fn diagnostic<E: ConvcheckErrorCode + std::fmt::Display>(err: E) -> anyhow::Error {
    anyhow::anyhow!(err.diagnostic())
}
