//! Convention checking for SwiftUI project layouts.
//!
//! The pipeline is: records (from a manifest, `PATH=ROLE` arguments or a
//! directory scan) → [`classifier::Classifier`] against the static
//! [`rules::RuleTable`] → [`reporters::Report`] → a [`reporters::Reporter`].

pub mod classifier;
pub mod manifest;
pub mod reporters;
pub mod rules;
pub mod scanner;
