//! Directory walk producing file records.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use ignore::WalkBuilder;

use convcheck_core::errors::ScanError;
use convcheck_core::types::FileRecord;

use super::ignores::{IgnorePatterns, IGNORE_FILE_NAME};
use super::role_inference::infer_role;
use super::types::{ScanOptions, ScanResult};

pub struct Scanner {
    options: ScanOptions,
}

impl Scanner {
    pub fn new(options: ScanOptions) -> Self {
        Self { options }
    }

    /// Walk the root and infer a role for every relevant file.
    ///
    /// Unreadable entries are recorded in `ScanResult::errors` and skipped;
    /// only a missing root fails the scan.
    pub fn scan(&self) -> Result<ScanResult, ScanError> {
        let start = Instant::now();
        let root = self.options.root.clone();
        if !root.is_dir() {
            return Err(ScanError::RootNotFound {
                path: root.display().to_string(),
            });
        }

        let ignores = Arc::new(IgnorePatterns::new(&root, &self.options.extra_ignores));
        let filter_root = root.clone();
        let filter_ignores = Arc::clone(&ignores);

        let walker = WalkBuilder::new(&root)
            .hidden(!self.options.include_hidden)
            .follow_links(self.options.follow_symlinks)
            .git_ignore(true)
            .require_git(false)
            .add_custom_ignore_filename(IGNORE_FILE_NAME)
            .filter_entry(move |entry| {
                let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
                match entry.path().strip_prefix(&filter_root) {
                    Ok(rel) if rel.as_os_str().is_empty() => true,
                    Ok(rel) => !filter_ignores.is_ignored(rel, is_dir),
                    Err(_) => true,
                }
            })
            .build();

        let mut result = ScanResult::default();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!(error = %e, "skipping unreadable entry");
                    result.errors.push(e.to_string());
                    continue;
                }
            };
            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }
            result.files_discovered += 1;

            let relative = relative_path(&root, entry.path());
            match infer_role(&relative) {
                Some(role) => {
                    tracing::debug!(path = %relative, role = %role, "inferred role");
                    result.records.push(FileRecord::new(relative, role));
                }
                None => result.files_skipped += 1,
            }
        }

        result.records.sort_by(|a, b| a.path.cmp(&b.path));

        tracing::info!(
            root = %root.display(),
            files_discovered = result.files_discovered,
            files_checked = result.records.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "scan complete"
        );
        Ok(result)
    }
}

/// Path relative to `root`, joined with `/` regardless of platform.
fn relative_path(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
