//! Rule table: the fixed structural conventions, one rule per role.

pub mod patterns;
pub mod table;

pub use patterns::{DirectoryPattern, NamePattern, CONVENTION_DIRECTORIES};
pub use table::{Rule, RuleTable};
