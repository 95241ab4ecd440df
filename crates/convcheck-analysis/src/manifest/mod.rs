//! Manifest input: file records from `PATH=ROLE` arguments or a manifest file.
//!
//! A manifest is either a JSON array of `{"path", "role"}` objects or a TOML
//! document with `[[file]]` tables. Unknown roles are kept; the classifier
//! reports them.

use std::path::Path;

use serde::Deserialize;

use convcheck_core::errors::InputError;
use convcheck_core::types::FileRecord;

#[derive(Deserialize)]
struct TomlManifest {
    #[serde(default)]
    file: Vec<FileRecord>,
}

/// Parse one `PATH=ROLE` argument. The split is on the last `=`, so paths
/// may contain `=` but roles may not.
pub fn parse_arg(arg: &str) -> Result<FileRecord, InputError> {
    let malformed = || InputError::MalformedArgument {
        arg: arg.to_string(),
    };
    let (path, role) = arg.rsplit_once('=').ok_or_else(malformed)?;
    if path.trim().is_empty() {
        return Err(malformed());
    }
    Ok(FileRecord::new(path, role.trim()))
}

pub fn parse_args<S: AsRef<str>>(args: &[S]) -> Result<Vec<FileRecord>, InputError> {
    args.iter().map(|a| parse_arg(a.as_ref())).collect()
}

/// Parse a JSON manifest body.
pub fn from_json(source: &str, origin: &str) -> Result<Vec<FileRecord>, InputError> {
    let records: Vec<FileRecord> =
        serde_json::from_str(source).map_err(|e| InputError::ManifestParse {
            path: origin.to_string(),
            message: e.to_string(),
        })?;
    Ok(renormalize(records))
}

/// Parse a TOML manifest body.
pub fn from_toml(source: &str, origin: &str) -> Result<Vec<FileRecord>, InputError> {
    let manifest: TomlManifest = toml::from_str(source).map_err(|e| InputError::ManifestParse {
        path: origin.to_string(),
        message: e.to_string(),
    })?;
    Ok(renormalize(manifest.file))
}

/// Read a manifest file, choosing the parser by extension.
pub fn load(path: &Path) -> Result<Vec<FileRecord>, InputError> {
    let origin = path.display().to_string();
    let parse: fn(&str, &str) -> Result<Vec<FileRecord>, InputError> =
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => from_json,
            Some("toml") => from_toml,
            _ => return Err(InputError::UnsupportedManifest { path: origin }),
        };
    let source = std::fs::read_to_string(path).map_err(|e| InputError::ManifestRead {
        path: origin.clone(),
        message: e.to_string(),
    })?;
    let records = parse(&source, &origin)?;
    tracing::debug!(manifest = %origin, files = records.len(), "manifest loaded");
    Ok(records)
}

/// Deserialized paths skip `FileRecord::new`, so normalise them here.
fn renormalize(records: Vec<FileRecord>) -> Vec<FileRecord> {
    records
        .into_iter()
        .map(|r| FileRecord::new(r.path, r.declared_role))
        .collect()
}
