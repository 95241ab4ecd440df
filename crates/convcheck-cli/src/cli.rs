use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "convcheck",
    version,
    about = "Check a SwiftUI project's file layout against its conventions"
)]
pub struct Cli {
    #[arg(long, global = true, value_enum, help = "Report format (default: from config, else console)")]
    pub format: Option<Format>,
    #[arg(long, global = true, help = "Project config file, replacing convcheck.toml lookup")]
    pub config: Option<PathBuf>,
    #[arg(long, global = true, help = "Disable colored console output")]
    pub no_color: bool,
    #[arg(
        long,
        global = true,
        value_enum,
        help = "Lowest severity that makes the run fail"
    )]
    pub fail_on: Option<FailOn>,
    #[arg(long, global = true, value_name = "GLOB", help = "Skip paths matching GLOB (repeatable)")]
    pub exempt: Vec<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check files given as PATH=ROLE arguments and/or a manifest.
    Check {
        #[arg(
            value_name = "PATH=ROLE",
            required_unless_present = "manifest",
            help = "A file path and its role, e.g. Clients/API/APIClient.swift=client"
        )]
        files: Vec<String>,
        #[arg(long, value_name = "FILE", help = "JSON or TOML manifest of files and roles")]
        manifest: Option<PathBuf>,
        #[arg(long, default_value = ".", help = "Project root used to find convcheck.toml")]
        root: PathBuf,
    },
    /// Walk a project directory, infer roles, and check the result.
    Scan {
        #[arg(default_value = ".")]
        dir: PathBuf,
    },
    /// Print the rule table.
    Rules {
        #[arg(long, default_value = ".", help = "Project root used to find convcheck.toml")]
        root: PathBuf,
    },
    /// Print the effective merged configuration as TOML.
    Config {
        #[arg(long, default_value = ".")]
        root: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Console,
    Json,
    Github,
}

impl Format {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Console => "console",
            Self::Json => "json",
            Self::Github => "github",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FailOn {
    Error,
    Warning,
    Info,
}

impl FailOn {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}
