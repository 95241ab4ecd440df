//! Directory and filename patterns used by rules.

use std::fmt;

use regex::Regex;

/// Every directory name the conventions give a meaning to.
pub const CONVENTION_DIRECTORIES: &[&str] = &[
    "Common",
    "Extensions",
    "Models",
    "Features",
    "Clients",
    "Resources",
    "Supporting Files",
];

/// Where a file of some role is allowed to live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryPattern {
    /// Not inside any convention directory.
    TargetRoot,
    /// Inside one of `dirs`. With `grouped`, at least one directory must sit
    /// between the anchor and the file (`Features/Login/LoginView.swift`).
    Under {
        dirs: &'static [&'static str],
        grouped: bool,
    },
}

impl DirectoryPattern {
    pub fn matches(&self, directories: &[&str]) -> bool {
        match self {
            Self::TargetRoot => !directories
                .iter()
                .any(|d| CONVENTION_DIRECTORIES.contains(d)),
            Self::Under { dirs, grouped } => {
                directories.iter().enumerate().any(|(idx, d)| {
                    dirs.contains(d) && (!grouped || idx + 1 < directories.len())
                })
            }
        }
    }

    /// Short human description used in violation messages.
    pub fn describe(&self) -> String {
        match self {
            Self::TargetRoot => "the app target root, outside any convention directory".to_string(),
            Self::Under { dirs, grouped } => {
                let names: Vec<String> = dirs
                    .iter()
                    .map(|d| if *grouped { format!("{d}/<Group>/") } else { format!("{d}/") })
                    .collect();
                names.join(" or ")
            }
        }
    }
}

impl fmt::Display for DirectoryPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TargetRoot => f.write_str("<target root>"),
            Self::Under { dirs, grouped } => {
                let suffix = if *grouped { "/*/" } else { "/" };
                let names: Vec<String> = dirs.iter().map(|d| format!("{d}{suffix}")).collect();
                f.write_str(&names.join(" | "))
            }
        }
    }
}

/// An anchored regex over a file stem with a `base` capture group.
#[derive(Debug, Clone)]
pub struct NamePattern {
    regex: Regex,
    /// Literal suffix stripped to recover a base name when the regex misses.
    suffix: &'static str,
    /// Example stem shown in messages, e.g. `<Name>View`.
    example: &'static str,
}

impl NamePattern {
    /// Panics on an invalid regex; only called on the static rule table.
    pub(crate) fn new(pattern: &str, suffix: &'static str, example: &'static str) -> Self {
        Self {
            regex: Regex::new(pattern).expect("rule table patterns are valid"),
            suffix,
            example,
        }
    }

    pub fn is_match(&self, stem: &str) -> bool {
        self.regex.is_match(stem)
    }

    /// Base name of `stem`: the `base` capture when the pattern matches,
    /// otherwise the stem with the literal suffix removed.
    pub fn base_name<'a>(&self, stem: &'a str) -> &'a str {
        if let Some(base) = self
            .regex
            .captures(stem)
            .and_then(|caps| caps.name("base"))
        {
            return base.as_str();
        }
        if !self.suffix.is_empty() {
            if let Some(base) = stem.strip_suffix(self.suffix) {
                if !base.is_empty() {
                    return base;
                }
            }
        }
        stem
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub fn suffix(&self) -> &'static str {
        self.suffix
    }

    pub fn example(&self) -> &'static str {
        self.example
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_root_rejects_convention_dirs() {
        assert!(DirectoryPattern::TargetRoot.matches(&[]));
        assert!(DirectoryPattern::TargetRoot.matches(&["MyApp"]));
        assert!(!DirectoryPattern::TargetRoot.matches(&["MyApp", "Features"]));
    }

    #[test]
    fn grouped_requires_a_subdirectory() {
        let pattern = DirectoryPattern::Under {
            dirs: &["Features"],
            grouped: true,
        };
        assert!(pattern.matches(&["Features", "Login"]));
        assert!(pattern.matches(&["MyApp", "Features", "Login", "Components"]));
        assert!(!pattern.matches(&["Features"]));
        assert!(!pattern.matches(&["Login"]));
    }

    #[test]
    fn ungrouped_accepts_any_depth() {
        let pattern = DirectoryPattern::Under {
            dirs: &["Models"],
            grouped: false,
        };
        assert!(pattern.matches(&["Models"]));
        assert!(pattern.matches(&["Models", "Persistence"]));
        assert!(!pattern.matches(&["Model"]));
    }

    #[test]
    fn base_name_falls_back_to_suffix_strip() {
        let pattern = NamePattern::new(r"^(?P<base>[A-Z][A-Za-z0-9]*)Client$", "Client", "<Name>Client");
        assert_eq!(pattern.base_name("APIClient"), "API");
        assert_eq!(pattern.base_name("apiClient"), "api");
        assert_eq!(pattern.base_name("Networking"), "Networking");
        assert_eq!(pattern.base_name("Client"), "Client");
    }
}
