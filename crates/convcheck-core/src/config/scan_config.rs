//! Scanner configuration.

use serde::{Deserialize, Serialize};

/// Configuration for `convcheck scan`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScanConfig {
    /// Additional gitignore-style patterns to skip (beyond the built-in Xcode ignores).
    pub extra_ignore: Vec<String>,
    /// Follow symbolic links. Default: false.
    pub follow_symlinks: Option<bool>,
    /// Descend into hidden files and directories. Default: false.
    pub include_hidden: Option<bool>,
}

impl ScanConfig {
    pub fn effective_follow_symlinks(&self) -> bool {
        self.follow_symlinks.unwrap_or(false)
    }

    pub fn effective_include_hidden(&self) -> bool {
        self.include_hidden.unwrap_or(false)
    }
}
