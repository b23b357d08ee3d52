//! Application layer: orchestration over the domain via ports.
//!
//! The domain layer is pure functions; this layer wires them to the outside
//! world through the [`ports`] traits and exposes the [`ScaffoldPipeline`]
//! use case.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::{ArtifactGenerator, Emitter, GeneratorRegistry};
pub use services::{RenderedScaffold, ScaffoldPipeline, ScaffoldReport};
