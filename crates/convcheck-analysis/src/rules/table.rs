//! The static rule table.

use std::sync::LazyLock;

use convcheck_core::types::{Role, UNCLASSIFIABLE_RULE_ID};

use super::patterns::{DirectoryPattern, NamePattern};

/// The structural constraints for one role.
#[derive(Debug, Clone)]
pub struct Rule {
    pub id: &'static str,
    pub role: Role,
    pub expected_directory: DirectoryPattern,
    pub filename_pattern: NamePattern,
    /// `Some("swift")` for code; `None` accepts any extension.
    pub required_extension: Option<&'static str>,
    /// A sibling with this role and the same base name must exist.
    pub pairing: Option<Role>,
}

/// One rule per role, in a fixed order that reports sort by.
#[derive(Debug)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

static STANDARD: LazyLock<RuleTable> = LazyLock::new(RuleTable::build_standard);

impl RuleTable {
    /// The standard table, built once.
    pub fn standard() -> &'static RuleTable {
        &STANDARD
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Every role has exactly one rule in the standard table.
    pub fn rule_for(&self, role: Role) -> Option<&Rule> {
        self.rules.iter().find(|r| r.role == role)
    }

    /// Sort position of a rule id. `unclassifiable` and unknown ids sort last.
    pub fn position(&self, rule_id: &str) -> usize {
        if rule_id == UNCLASSIFIABLE_RULE_ID {
            return self.rules.len();
        }
        self.rules
            .iter()
            .position(|r| r.id == rule_id)
            .unwrap_or(self.rules.len() + 1)
    }

    fn build_standard() -> RuleTable {
        let swift = Some("swift");
        let rules = vec![
            Rule {
                id: Role::App.as_str(),
                role: Role::App,
                expected_directory: DirectoryPattern::TargetRoot,
                filename_pattern: NamePattern::new(
                    r"^(?P<base>[A-Z][A-Za-z0-9]*)App$",
                    "App",
                    "<Name>App",
                ),
                required_extension: swift,
                pairing: None,
            },
            Rule {
                id: Role::View.as_str(),
                role: Role::View,
                expected_directory: DirectoryPattern::Under {
                    dirs: &["Features", "Common"],
                    grouped: false,
                },
                filename_pattern: NamePattern::new(
                    r"^(?P<base>[A-Z][A-Za-z0-9]*)View$",
                    "View",
                    "<Name>View",
                ),
                required_extension: swift,
                pairing: None,
            },
            Rule {
                id: Role::ViewModel.as_str(),
                role: Role::ViewModel,
                expected_directory: DirectoryPattern::Under {
                    dirs: &["Features"],
                    grouped: true,
                },
                filename_pattern: NamePattern::new(
                    r"^(?P<base>[A-Z][A-Za-z0-9]*)ViewModel$",
                    "ViewModel",
                    "<Name>ViewModel",
                ),
                required_extension: swift,
                pairing: Some(Role::View),
            },
            Rule {
                id: Role::ClientDeclaration.as_str(),
                role: Role::ClientDeclaration,
                expected_directory: DirectoryPattern::Under {
                    dirs: &["Clients"],
                    grouped: true,
                },
                filename_pattern: NamePattern::new(
                    r"^(?P<base>[A-Z][A-Za-z0-9]*)Client$",
                    "Client",
                    "<Name>Client",
                ),
                required_extension: swift,
                pairing: Some(Role::ClientLive),
            },
            Rule {
                id: Role::ClientLive.as_str(),
                role: Role::ClientLive,
                expected_directory: DirectoryPattern::Under {
                    dirs: &["Clients"],
                    grouped: true,
                },
                filename_pattern: NamePattern::new(
                    r"^(?P<base>[A-Z][A-Za-z0-9]*)Client\+Live$",
                    "Client+Live",
                    "<Name>Client+Live",
                ),
                required_extension: swift,
                pairing: Some(Role::ClientDeclaration),
            },
            Rule {
                id: Role::Model.as_str(),
                role: Role::Model,
                expected_directory: DirectoryPattern::Under {
                    dirs: &["Models"],
                    grouped: false,
                },
                filename_pattern: NamePattern::new(
                    r"^(?P<base>[A-Z][A-Za-z0-9]*)$",
                    "",
                    "<TypeName>",
                ),
                required_extension: swift,
                pairing: None,
            },
            Rule {
                id: Role::Extension.as_str(),
                role: Role::Extension,
                expected_directory: DirectoryPattern::Under {
                    dirs: &["Extensions"],
                    grouped: false,
                },
                filename_pattern: NamePattern::new(
                    r"^(?P<base>[A-Z][A-Za-z0-9_.]*)\+Extensions$",
                    "+Extensions",
                    "<TypeBeingExtended>+Extensions",
                ),
                required_extension: swift,
                pairing: None,
            },
            Rule {
                id: Role::Resource.as_str(),
                role: Role::Resource,
                expected_directory: DirectoryPattern::Under {
                    dirs: &["Resources"],
                    grouped: false,
                },
                filename_pattern: NamePattern::new(r"^(?P<base>.+)$", "", "<any name>"),
                required_extension: None,
                pairing: None,
            },
            Rule {
                id: Role::SupportingFile.as_str(),
                role: Role::SupportingFile,
                expected_directory: DirectoryPattern::Under {
                    dirs: &["Supporting Files"],
                    grouped: false,
                },
                filename_pattern: NamePattern::new(r"^(?P<base>.+)$", "", "<any name>"),
                required_extension: None,
                pairing: None,
            },
        ];
        RuleTable { rules }
    }
}
