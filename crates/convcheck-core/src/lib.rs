//! Core types, errors, configuration and tracing for convcheck.
//!
//! Everything here is shared by the analysis crate and the CLI. Nothing in this
//! crate touches the rule table or produces violations.

pub mod config;
pub mod errors;
pub mod tracing;
pub mod types;
