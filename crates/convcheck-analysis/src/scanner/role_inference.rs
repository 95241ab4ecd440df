//! Role inference for scanned files.
//!
//! Swift files are classified by name suffix first, then by the nearest
//! convention directory. Other files are only considered when they look like
//! resources or supporting files; everything else is skipped.

use convcheck_core::types::{DeclaredRole, FileRecord, Role};

/// Stem suffixes, checked in order. `Client+Live` precedes `Client` and
/// `ViewModel` precedes `View`.
const SUFFIX_ROLES: &[(&str, Role)] = &[
    ("+Extensions", Role::Extension),
    ("Client+Live", Role::ClientLive),
    ("Client", Role::ClientDeclaration),
    ("ViewModel", Role::ViewModel),
    ("View", Role::View),
    ("App", Role::App),
];

/// Directory fallbacks for Swift files whose name carries no suffix.
const DIRECTORY_ROLES: &[(&str, Role)] = &[
    ("Models", Role::Model),
    ("Extensions", Role::Extension),
    ("Resources", Role::Resource),
    ("Supporting Files", Role::SupportingFile),
];

const SUPPORTING_EXTENSIONS: &[&str] = &["plist", "entitlements", "xcconfig", "pch"];

const RESOURCE_EXTENSIONS: &[&str] = &[
    "strings", "stringsdict", "xcstrings", "ttf", "otf", "json", "png", "jpg", "jpeg", "pdf",
    "svg", "mp3", "wav", "mp4", "storyboard", "xib",
];

/// Infer the role of `path` (relative, `/`-separated).
///
/// `None` means the file is irrelevant to the layout conventions and should
/// not become a record. `Some(DeclaredRole::Unknown(""))` means it is a
/// Swift file that no rule claims.
pub fn infer_role(path: &str) -> Option<DeclaredRole> {
    let probe = FileRecord::new(path, DeclaredRole::Unknown(String::new()));
    let directories = probe.directories();
    let nearest_dir_role = directories.iter().rev().find_map(|d| {
        DIRECTORY_ROLES
            .iter()
            .find(|(name, _)| name == d)
            .map(|(_, role)| *role)
    });

    match probe.extension() {
        Some("swift") => {
            let stem = probe.stem();
            let by_suffix = SUFFIX_ROLES
                .iter()
                .find(|(suffix, _)| stem.len() > suffix.len() && stem.ends_with(suffix))
                .map(|(_, role)| *role);
            Some(match by_suffix.or(nearest_dir_role) {
                Some(role) => DeclaredRole::Known(role),
                None => DeclaredRole::Unknown(String::new()),
            })
        }
        ext => {
            if matches!(nearest_dir_role, Some(Role::Resource | Role::SupportingFile)) {
                return nearest_dir_role.map(DeclaredRole::Known);
            }
            if directories.iter().any(|d| d.ends_with(".xcassets") || d.ends_with(".lproj")) {
                return Some(DeclaredRole::Known(Role::Resource));
            }
            let ext = ext?;
            if SUPPORTING_EXTENSIONS.contains(&ext) {
                Some(DeclaredRole::Known(Role::SupportingFile))
            } else if RESOURCE_EXTENSIONS.contains(&ext) {
                Some(DeclaredRole::Known(Role::Resource))
            } else {
                None
            }
        }
    }
}
