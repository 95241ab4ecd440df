//! Observability for convcheck.
//! `tracing` crate with `EnvFilter`, configured through `CONVCHECK_LOG`.

pub mod setup;

pub use setup::init_tracing;
