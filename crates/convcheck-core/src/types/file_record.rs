//! A single input file: a path plus the role the caller says it plays.

use serde::{Deserialize, Serialize};

use super::{DeclaredRole, Role};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileRecord {
    pub path: String,
    #[serde(rename = "role")]
    pub declared_role: DeclaredRole,
}

impl FileRecord {
    /// Build a record, normalising the path to `/` separators with no
    /// leading `./`.
    pub fn new(path: impl AsRef<str>, declared_role: impl Into<DeclaredRole>) -> Self {
        Self {
            path: normalize_path(path.as_ref()),
            declared_role: declared_role.into(),
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.declared_role.known()
    }

    /// Final path component.
    pub fn file_name(&self) -> &str {
        match self.path.rfind('/') {
            Some(idx) => &self.path[idx + 1..],
            None => &self.path,
        }
    }

    /// File name without its final extension. A leading dot is part of the
    /// stem, so `.gitkeep` has stem `.gitkeep` and no extension.
    pub fn stem(&self) -> &str {
        let name = self.file_name();
        match name.rfind('.') {
            Some(idx) if idx > 0 => &name[..idx],
            _ => name,
        }
    }

    pub fn extension(&self) -> Option<&str> {
        let name = self.file_name();
        match name.rfind('.') {
            Some(idx) if idx > 0 && idx + 1 < name.len() => Some(&name[idx + 1..]),
            _ => None,
        }
    }

    /// Parent directory, `""` for a file at the root.
    pub fn parent(&self) -> &str {
        match self.path.rfind('/') {
            Some(idx) => &self.path[..idx],
            None => "",
        }
    }

    /// Directory components from the root down, excluding the file name.
    pub fn directories(&self) -> Vec<&str> {
        let parent = self.parent();
        if parent.is_empty() {
            Vec::new()
        } else {
            parent.split('/').collect()
        }
    }
}

fn normalize_path(raw: &str) -> String {
    let mut path = raw.trim().replace('\\', "/");
    while let Some(rest) = path.strip_prefix("./") {
        path = rest.to_string();
    }
    while path.contains("//") {
        path = path.replace("//", "/");
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_parts() {
        let record = FileRecord::new("Clients/API/APIClient+Live.swift", Role::ClientLive);
        assert_eq!(record.file_name(), "APIClient+Live.swift");
        assert_eq!(record.stem(), "APIClient+Live");
        assert_eq!(record.extension(), Some("swift"));
        assert_eq!(record.parent(), "Clients/API");
        assert_eq!(record.directories(), vec!["Clients", "API"]);
    }

    #[test]
    fn root_file_has_no_directories() {
        let record = FileRecord::new("MyApp.swift", Role::App);
        assert_eq!(record.parent(), "");
        assert!(record.directories().is_empty());
    }

    #[test]
    fn normalizes_separators() {
        let record = FileRecord::new(".\\Models\\User.swift", Role::Model);
        assert_eq!(record.path, "Models/User.swift");
    }

    #[test]
    fn dotfile_has_no_extension() {
        let record = FileRecord::new("Resources/.gitkeep", Role::Resource);
        assert_eq!(record.stem(), ".gitkeep");
        assert_eq!(record.extension(), None);
    }
}
