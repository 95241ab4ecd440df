//! Default ignore patterns for Xcode project trees.

use std::path::Path;

use ignore::gitignore::{Gitignore, GitignoreBuilder};

/// Per-project ignore file, read from the scan root.
pub const IGNORE_FILE_NAME: &str = ".convcheckignore";

/// Build products, dependency checkouts and Xcode bundles that never hold
/// hand-written sources.
pub const DEFAULT_IGNORE_DIRS: &[&str] = &[
    // Xcode project bundles
    "*.xcodeproj",
    "*.xcworkspace",
    "xcuserdata",
    // Build outputs
    "DerivedData",
    "build",
    ".build",
    // Dependency managers
    "Pods",
    "Carthage",
    ".swiftpm",
    // Version control
    ".git",
    ".svn",
    ".hg",
    // Editors
    ".idea",
    ".vscode",
];

/// Files that are never part of the project layout.
pub const DEFAULT_IGNORE_FILES: &[&str] = &[
    ".DS_Store",
    "*.swp",
    "*~",
    "Package.resolved",
    "Podfile.lock",
    "Cartfile.resolved",
];

/// Gitignore-style matcher over paths relative to the scan root.
#[derive(Clone)]
pub struct IgnorePatterns {
    gitignore: Gitignore,
}

impl IgnorePatterns {
    /// Defaults, then `extra_patterns`, then `.convcheckignore` if present.
    pub fn new(root: &Path, extra_patterns: &[String]) -> Self {
        let mut builder = GitignoreBuilder::new(root);

        for pattern in DEFAULT_IGNORE_DIRS.iter().chain(DEFAULT_IGNORE_FILES) {
            let _ = builder.add_line(None, pattern);
        }

        for pattern in extra_patterns {
            if let Err(e) = builder.add_line(None, pattern) {
                tracing::warn!(pattern = %pattern, error = %e, "ignoring invalid scan pattern");
            }
        }

        let ignore_file = root.join(IGNORE_FILE_NAME);
        if ignore_file.exists() {
            if let Some(e) = builder.add(&ignore_file) {
                tracing::warn!(path = %ignore_file.display(), error = %e, "partially read ignore file");
            }
        }

        let gitignore = builder.build().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "falling back to no ignore patterns");
            Gitignore::empty()
        });
        Self { gitignore }
    }

    /// Check if a path (relative to the root) should be ignored.
    pub fn is_ignored(&self, path: &Path, is_dir: bool) -> bool {
        self.gitignore.matched(path, is_dir).is_ignore()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_ignore_xcode_bundles() {
        let root = PathBuf::from("/project");
        let patterns = IgnorePatterns::new(&root, &[]);

        assert!(patterns.is_ignored(Path::new("MyApp.xcodeproj"), true));
        assert!(patterns.is_ignored(Path::new("Pods"), true));
        assert!(patterns.is_ignored(Path::new("MyApp/DerivedData"), true));
    }

    #[test]
    fn test_ignore_junk_files() {
        let root = PathBuf::from("/project");
        let patterns = IgnorePatterns::new(&root, &[]);

        assert!(patterns.is_ignored(Path::new(".DS_Store"), false));
        assert!(patterns.is_ignored(Path::new("Features/.DS_Store"), false));
    }

    #[test]
    fn test_allow_sources_and_resources() {
        let root = PathBuf::from("/project");
        let patterns = IgnorePatterns::new(&root, &[]);

        assert!(!patterns.is_ignored(Path::new("Features/Login/LoginView.swift"), false));
        assert!(!patterns.is_ignored(Path::new("Resources/Assets.xcassets"), true));
        assert!(!patterns.is_ignored(Path::new("Supporting Files"), true));
    }

    #[test]
    fn test_extra_patterns() {
        let root = PathBuf::from("/project");
        let patterns = IgnorePatterns::new(&root, &["Generated/".to_string()]);

        assert!(patterns.is_ignored(Path::new("Generated"), true));
        assert!(!patterns.is_ignored(Path::new("Generated"), false));
    }
}
