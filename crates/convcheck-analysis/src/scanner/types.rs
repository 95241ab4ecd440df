//! Scanner types.

use std::path::PathBuf;

use convcheck_core::config::ScanConfig;
use convcheck_core::types::FileRecord;

/// Options for one scan.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Directory to scan; record paths are relative to it.
    pub root: PathBuf,
    /// Additional gitignore-style patterns (beyond the built-in defaults).
    pub extra_ignores: Vec<String>,
    pub follow_symlinks: bool,
    pub include_hidden: bool,
}

impl ScanOptions {
    pub fn from_config(root: impl Into<PathBuf>, config: &ScanConfig) -> Self {
        Self {
            root: root.into(),
            extra_ignores: config.extra_ignore.clone(),
            follow_symlinks: config.effective_follow_symlinks(),
            include_hidden: config.effective_include_hidden(),
        }
    }
}

/// What a scan found.
#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    /// Records sorted by path.
    pub records: Vec<FileRecord>,
    /// Files seen by the walk, including ones skipped as irrelevant.
    pub files_discovered: usize,
    /// Files that are neither Swift sources nor resources.
    pub files_skipped: usize,
    /// Entries the walk could not read.
    pub errors: Vec<String>,
}
