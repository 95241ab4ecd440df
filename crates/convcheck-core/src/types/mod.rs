//! Shared domain types.

pub mod file_record;
pub mod role;
pub mod severity;
pub mod violation_kind;

pub use file_record::FileRecord;
pub use role::{DeclaredRole, Role};
pub use severity::Severity;
pub use violation_kind::ViolationKind;

/// Rule id carried by violations for records whose role is not in the table.
pub const UNCLASSIFIABLE_RULE_ID: &str = "unclassifiable";
