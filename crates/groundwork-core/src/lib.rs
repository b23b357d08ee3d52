//! Groundwork Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Groundwork
//! scaffolding tool: everything between "a document containing a
//! configuration block" and "a list of artifacts handed to an emitter".
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │        groundwork-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         ScaffoldPipeline                │
//! │   extract → validate → plan → generate  │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     Ports (Emitter, ArtifactGenerator)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   groundwork-adapters (Infrastructure)  │
//! │   (LocalEmitter, builtin generators)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! The domain layer (schema, extraction, validation, planning) has no I/O
//! and no suspension points; a whole run is a sequence of pure
//! transformations until the final emitter handoff.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use groundwork_core::prelude::*;
//!
//! # fn run(registry: GeneratorRegistry, emitter: Box<dyn Emitter>) -> GroundworkResult<()> {
//! let document = std::fs::read_to_string("README.md").unwrap();
//! let pipeline = ScaffoldPipeline::new(registry, emitter);
//! let report = pipeline.scaffold(&document, &BlockMarkers::default(), ".")?;
//! println!("{} files written", report.files_written);
//! # Ok(())
//! # }
//! ```

// Domain layer (stable, well-defined API)
pub mod domain;

// Application layer (orchestration logic)
pub mod application;

// Error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ArtifactGenerator, Emitter, GeneratorRegistry, RenderedScaffold, ScaffoldPipeline,
        ScaffoldReport,
    };
    pub use crate::domain::{
        Artifact, ArtifactSet, BlockMarkers, FieldId, GenerationAction, GeneratorId,
        GeneratorParams, Language, RawConfig, ValidatedConfig, Violation, extract, plan, validate,
    };
    pub use crate::error::{GroundworkError, GroundworkResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
