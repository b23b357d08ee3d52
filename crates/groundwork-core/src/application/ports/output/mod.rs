//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from the outside world.
//! The `groundwork-adapters` crate provides implementations.

use std::collections::HashMap;
use std::path::Path;

use crate::domain::artifact::Artifact;
use crate::domain::plan::{GenerationAction, GeneratorId, GeneratorParams};
use crate::error::GroundworkResult;

/// Port for materializing artifacts.
///
/// Implemented by:
/// - `groundwork_adapters::emitter::LocalEmitter` (production, std::fs)
/// - `groundwork_adapters::emitter::MemoryEmitter` (testing)
///
/// ## Design Notes
///
/// - Paths handed to the emitter are already joined with the output root.
/// - Writes are overwrite-in-place; the emitter never deletes anything.
#[cfg_attr(test, mockall::automock)]
pub trait Emitter: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> GroundworkResult<()>;

    /// Write content to a file, creating or replacing it.
    fn write_file(&self, path: &Path, content: &str) -> GroundworkResult<()>;
}

/// Port for one artifact generator family.
///
/// A generator is a pure function from its parameter slice to artifacts. It
/// must not read the filesystem or depend on sibling generators' output.
/// Invoking one outside its precondition (the planner's responsibility to
/// avoid) yields `DomainError::UnmappedGenerator`.
pub trait ArtifactGenerator: Send + Sync {
    /// The identifier this generator serves.
    fn id(&self) -> GeneratorId;

    /// Produce the artifacts for one planned action.
    fn generate(&self, params: &GeneratorParams) -> GroundworkResult<Vec<Artifact>>;
}

/// Registry mapping generator identifiers to implementations.
///
/// Populated once at startup (see `groundwork_adapters::generators::
/// builtin_registry`) and read-only afterwards.
#[derive(Default)]
pub struct GeneratorRegistry {
    generators: HashMap<GeneratorId, Box<dyn ArtifactGenerator>>,
}

impl GeneratorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a generator under its own id. Last registration wins.
    pub fn register(&mut self, generator: Box<dyn ArtifactGenerator>) {
        self.generators.insert(generator.id(), generator);
    }

    /// Builder-style registration.
    pub fn with(mut self, generator: Box<dyn ArtifactGenerator>) -> Self {
        self.register(generator);
        self
    }

    pub fn contains(&self, id: GeneratorId) -> bool {
        self.generators.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.generators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }

    /// Dispatch one planned action to its generator.
    pub fn run(&self, action: &GenerationAction) -> GroundworkResult<Vec<Artifact>> {
        match self.generators.get(&action.generator) {
            Some(generator) => generator.generate(&action.params),
            None => Err(crate::application::ApplicationError::GeneratorNotRegistered {
                generator: action.generator,
            }
            .into()),
        }
    }
}

impl std::fmt::Debug for GeneratorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneratorRegistry")
            .field("generators", &self.generators.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ApplicationError;
    use crate::error::GroundworkError;

    struct StubGenerator(GeneratorId);

    impl ArtifactGenerator for StubGenerator {
        fn id(&self) -> GeneratorId {
            self.0
        }

        fn generate(&self, _params: &GeneratorParams) -> GroundworkResult<Vec<Artifact>> {
            Ok(vec![Artifact::file("stub.txt", "stub")])
        }
    }

    #[test]
    fn registry_dispatches_by_id() {
        let registry =
            GeneratorRegistry::new().with(Box::new(StubGenerator(GeneratorId::IgnoreFile)));

        let action = GenerationAction {
            generator: GeneratorId::IgnoreFile,
            params: GeneratorParams::default(),
        };
        let artifacts = registry.run(&action).unwrap();
        assert_eq!(artifacts.len(), 1);
    }

    #[test]
    fn unregistered_generator_is_an_application_error() {
        let registry = GeneratorRegistry::new();
        let action = GenerationAction {
            generator: GeneratorId::EditorConfig,
            params: GeneratorParams::default(),
        };
        match registry.run(&action) {
            Err(GroundworkError::Application(ApplicationError::GeneratorNotRegistered {
                generator,
            })) => assert_eq!(generator, GeneratorId::EditorConfig),
            other => panic!("expected GeneratorNotRegistered, got {other:?}"),
        }
    }

    #[test]
    fn re_registration_replaces() {
        let mut registry = GeneratorRegistry::new();
        registry.register(Box::new(StubGenerator(GeneratorId::IgnoreFile)));
        registry.register(Box::new(StubGenerator(GeneratorId::IgnoreFile)));
        assert_eq!(registry.len(), 1);
    }
}
