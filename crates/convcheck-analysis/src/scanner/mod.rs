//! Scanner subsystem: walks a project directory and infers a role per file.
//!
//! The classifier never touches the filesystem; this is the collaborator that
//! turns a directory into file records when no manifest is given.

pub mod ignores;
pub mod role_inference;
pub mod types;
pub mod walker;

pub use ignores::IgnorePatterns;
pub use role_inference::infer_role;
pub use types::{ScanOptions, ScanResult};
pub use walker::Scanner;
