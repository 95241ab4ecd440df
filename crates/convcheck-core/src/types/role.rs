//! File roles and the caller-declared role of a record.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The nine file roles of a conventionally laid-out SwiftUI project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    App,
    View,
    ViewModel,
    #[serde(rename = "client")]
    ClientDeclaration,
    ClientLive,
    Model,
    Extension,
    Resource,
    SupportingFile,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::App => "app",
            Self::View => "view",
            Self::ViewModel => "view-model",
            Self::ClientDeclaration => "client",
            Self::ClientLive => "client-live",
            Self::Model => "model",
            Self::Extension => "extension",
            Self::Resource => "resource",
            Self::SupportingFile => "supporting-file",
        }
    }

    pub fn all() -> &'static [Role] {
        &[
            Self::App,
            Self::View,
            Self::ViewModel,
            Self::ClientDeclaration,
            Self::ClientLive,
            Self::Model,
            Self::Extension,
            Self::Resource,
            Self::SupportingFile,
        ]
    }

    /// Parse a role name. Case-insensitive, and `-`, `_` and spaces are
    /// ignored, so `client-live`, `ClientLive` and `client_live` are the same.
    /// Accepts the wire names plus a handful of aliases.
    pub fn parse(s: &str) -> Option<Role> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match normalized.as_str() {
            "app" | "entrypoint" | "appentrypoint" => Some(Self::App),
            "view" => Some(Self::View),
            "viewmodel" => Some(Self::ViewModel),
            "client" | "clientdeclaration" => Some(Self::ClientDeclaration),
            "clientlive" | "liveclient" => Some(Self::ClientLive),
            "model" => Some(Self::Model),
            "extension" | "extensions" => Some(Self::Extension),
            "resource" | "resources" => Some(Self::Resource),
            "supportingfile" | "supportingfiles" | "supporting" => Some(Self::SupportingFile),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A role exactly as the caller declared it.
///
/// Unknown names are kept rather than rejected so that a single bad record
/// becomes a violation instead of aborting the whole run.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DeclaredRole {
    Known(Role),
    Unknown(String),
}

impl DeclaredRole {
    pub fn known(&self) -> Option<Role> {
        match self {
            Self::Known(role) => Some(*role),
            Self::Unknown(_) => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(role) => role.as_str(),
            Self::Unknown(raw) => raw,
        }
    }
}

impl From<&str> for DeclaredRole {
    fn from(s: &str) -> Self {
        match Role::parse(s) {
            Some(role) => Self::Known(role),
            None => Self::Unknown(s.to_string()),
        }
    }
}

impl From<Role> for DeclaredRole {
    fn from(role: Role) -> Self {
        Self::Known(role)
    }
}

impl fmt::Display for DeclaredRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for DeclaredRole {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DeclaredRole {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(DeclaredRole::from(raw.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_round_trip_through_parse() {
        for role in Role::all() {
            assert_eq!(Role::parse(role.as_str()), Some(*role));
        }
    }

    #[test]
    fn parse_accepts_aliases_and_case() {
        assert_eq!(Role::parse("ClientDeclaration"), Some(Role::ClientDeclaration));
        assert_eq!(Role::parse("ClientLive"), Some(Role::ClientLive));
        assert_eq!(Role::parse("SupportingFile"), Some(Role::SupportingFile));
        assert_eq!(Role::parse("EntryPoint"), Some(Role::App));
        assert_eq!(Role::parse("client_declaration"), Some(Role::ClientDeclaration));
        assert_eq!(Role::parse("ViewModel"), Some(Role::ViewModel));
        assert_eq!(Role::parse(" Supporting Files "), Some(Role::SupportingFile));
        assert_eq!(Role::parse("widget"), None);
    }

    #[test]
    fn unknown_role_keeps_raw_text() {
        let declared = DeclaredRole::from("Widget");
        assert_eq!(declared, DeclaredRole::Unknown("Widget".to_string()));
        assert_eq!(declared.as_str(), "Widget");
        assert!(declared.known().is_none());
    }

    #[test]
    fn serde_uses_wire_names() {
        let json = serde_json::to_string(&Role::ClientDeclaration).unwrap();
        assert_eq!(json, "\"client\"");
        let declared: DeclaredRole = serde_json::from_str("\"view-model\"").unwrap();
        assert_eq!(declared, DeclaredRole::Known(Role::ViewModel));
    }
}
