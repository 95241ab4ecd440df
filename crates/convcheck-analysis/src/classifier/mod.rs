//! Classifier: checks each file record against the rule for its role.

pub mod classify;
pub mod pairing;
pub mod types;

pub use classify::Classifier;
pub use pairing::SiblingIndex;
pub use types::Violation;
