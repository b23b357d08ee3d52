//! Application ports (traits).
//!
//! Driven (output) ports only: Groundwork is driven by the CLI directly, so
//! there are no driving-port traits. Implementations live in the
//! `groundwork-adapters` crate.

pub mod output;

pub use output::{ArtifactGenerator, Emitter, GeneratorRegistry};
