//! Configuration system for convcheck.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod check_config;
pub mod convcheck_config;
pub mod report_config;
pub mod scan_config;

pub use check_config::CheckConfig;
pub use convcheck_config::{CliOverrides, ConvcheckConfig};
pub use report_config::ReportConfig;
pub use scan_config::ScanConfig;
