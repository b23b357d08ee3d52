//! Core domain layer for Groundwork.
//!
//! Pure business logic with no I/O: the schema registry, configuration
//! extraction and validation, and generation planning. Everything here is a
//! synchronous function over immutable data; filesystem concerns live behind
//! ports in the application layer.
//!
//! Pipeline: document text → [`extract`] → [`RawConfig`] → [`validate`] →
//! [`ValidatedConfig`] → [`plan`] → [`GenerationAction`]s.

pub mod artifact;
pub mod config;
pub mod error;
pub mod extract;
pub mod fields;
pub mod plan;
pub mod schema;

mod validate;

pub use artifact::{Artifact, ArtifactSet};
pub use config::{RawConfig, ValidatedConfig};
pub use error::{DomainError, ErrorCategory, Violation};
pub use extract::{BlockMarkers, DEFAULT_END_MARKER, DEFAULT_START_MARKER, extract};
pub use fields::{
    BuildSystem, CiCd, Database, Deployment, FieldId, Framework, Language, LicenseType,
    ProjectType, Testing, Visibility,
};
pub use plan::{GenerationAction, GeneratorId, GeneratorParams, plan};
pub use schema::{SCHEMA, SchemaField, allowed_values, find_field};
pub use validate::{validate, violations};
