//! Built-in artifact generators.
//!
//! One generator per artifact family, each a pure function from its
//! parameter slice to `(path, content)` pairs. The literal boilerplate lives
//! here, in the adapters crate; the core only ever sees opaque artifacts.
//!
//! [`builtin_registry`] assembles the full set. The
//! `builtin_registry_covers_every_generator_id` test keeps it paired with the
//! planner: a `GeneratorId` the registry cannot serve is a wiring defect.

pub mod config_files;
pub mod container;
pub mod manifests;
pub mod workflows;

use groundwork_core::{
    application::ports::{ArtifactGenerator, GeneratorRegistry},
    domain::{Artifact, DomainError, GeneratorId, GeneratorParams, Language},
    error::{GroundworkError, GroundworkResult},
};

/// The registry holding every built-in generator.
pub fn builtin_registry() -> GeneratorRegistry {
    GeneratorRegistry::new()
        .with(Box::new(ProjectTreeGenerator))
        .with(Box::new(manifests::DependencyManifestGenerator))
        .with(Box::new(manifests::PackageManifestGenerator))
        .with(Box::new(manifests::ModuleManifestGenerator))
        .with(Box::new(manifests::CrateManifestGenerator))
        .with(Box::new(manifests::BuildManifestGenerator))
        .with(Box::new(config_files::IgnoreFileGenerator))
        .with(Box::new(config_files::EditorConfigGenerator))
        .with(Box::new(config_files::TestConfigGenerator))
        .with(Box::new(workflows::CiWorkflowGenerator))
        .with(Box::new(workflows::CdWorkflowGenerator))
        .with(Box::new(workflows::SecurityWorkflowGenerator))
        .with(Box::new(workflows::DependabotGenerator))
        .with(Box::new(container::ContainerManifestGenerator))
}

// ── Shared precondition helpers ──────────────────────────────────────────────

/// An internal-consistency fault: the planner handed a generator parameters
/// outside its precondition.
pub(crate) fn unmapped(generator: GeneratorId, detail: impl Into<String>) -> GroundworkError {
    DomainError::UnmappedGenerator {
        generator,
        detail: detail.into(),
    }
    .into()
}

/// Pull the language parameter a generator requires.
pub(crate) fn require_language(
    generator: GeneratorId,
    params: &GeneratorParams,
) -> GroundworkResult<Language> {
    params
        .language
        .ok_or_else(|| unmapped(generator, "missing language parameter"))
}

// ── Project tree ─────────────────────────────────────────────────────────────

/// Emits the planned directory skeleton, one artifact per directory.
pub struct ProjectTreeGenerator;

impl ArtifactGenerator for ProjectTreeGenerator {
    fn id(&self) -> GeneratorId {
        GeneratorId::ProjectTree
    }

    fn generate(&self, params: &GeneratorParams) -> GroundworkResult<Vec<Artifact>> {
        Ok(params
            .directories
            .iter()
            .map(|d| Artifact::dir(d.clone()))
            .collect())
    }
}
