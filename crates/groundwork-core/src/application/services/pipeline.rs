//! Scaffold pipeline - main application orchestrator.
//!
//! Runs the whole transformation for one document:
//! 1. Extract the configuration block
//! 2. Validate against the schema
//! 3. Plan generation actions
//! 4. Run every generator (entirely in memory)
//! 5. Hand artifacts to the emitter
//!
//! Steps 1-4 perform no I/O, so a failing configuration never touches disk:
//! the first emitter call happens only after every artifact exists in memory
//! and the set has passed its structural checks.

use std::path::Path;

use tracing::{info, instrument};

use crate::{
    application::ports::{Emitter, GeneratorRegistry},
    domain::{
        Artifact, ArtifactSet, BlockMarkers, GenerationAction, ValidatedConfig, extract, plan,
        validate,
    },
    error::GroundworkResult,
};

/// A fully rendered run, not yet materialized.
///
/// This is what `--dry-run` shows: the validated configuration, the action
/// plan, and every artifact's path and content.
#[derive(Debug)]
pub struct RenderedScaffold {
    pub config: ValidatedConfig,
    pub actions: Vec<GenerationAction>,
    pub artifacts: ArtifactSet,
}

/// Summary of a completed scaffold run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub directories_created: usize,
    pub files_written: usize,
}

/// Main scaffolding service.
///
/// Owns the generator registry and the emitter; everything upstream of
/// generation is free functions in the domain layer.
pub struct ScaffoldPipeline {
    registry: GeneratorRegistry,
    emitter: Box<dyn Emitter>,
}

impl ScaffoldPipeline {
    pub fn new(registry: GeneratorRegistry, emitter: Box<dyn Emitter>) -> Self {
        Self { registry, emitter }
    }

    /// Run extraction, validation, planning, and generation (no emission).
    #[instrument(skip_all)]
    pub fn render(
        &self,
        document: &str,
        markers: &BlockMarkers,
    ) -> GroundworkResult<RenderedScaffold> {
        let raw = extract(document, markers)?;
        let config = validate(&raw)?;
        info!(
            project_type = %config.project_type(),
            language = %config.language(),
            "configuration validated"
        );

        let actions = plan(&config);
        let mut artifacts = ArtifactSet::new();
        for action in &actions {
            artifacts.extend(self.registry.run(action)?);
        }
        artifacts.validate()?;

        info!(
            actions = actions.len(),
            artifacts = artifacts.len(),
            "scaffold rendered"
        );
        Ok(RenderedScaffold {
            config,
            actions,
            artifacts,
        })
    }

    /// Full pipeline: render, then materialize under `output_root`.
    #[instrument(skip_all, fields(output_root = %output_root.as_ref().display()))]
    pub fn scaffold(
        &self,
        document: &str,
        markers: &BlockMarkers,
        output_root: impl AsRef<Path>,
    ) -> GroundworkResult<ScaffoldReport> {
        let rendered = self.render(document, markers)?;
        let report = self.emit(&rendered.artifacts, output_root.as_ref())?;
        info!(
            directories = report.directories_created,
            files = report.files_written,
            "scaffold completed"
        );
        Ok(report)
    }

    /// Write every artifact through the emitter, parents before children.
    fn emit(&self, artifacts: &ArtifactSet, root: &Path) -> GroundworkResult<ScaffoldReport> {
        let mut report = ScaffoldReport {
            directories_created: 0,
            files_written: 0,
        };

        self.emitter.create_dir_all(root)?;

        for artifact in artifacts.entries() {
            match artifact {
                Artifact::Directory { path } => {
                    self.emitter.create_dir_all(&root.join(path))?;
                    report.directories_created += 1;
                }
                Artifact::File { path, content } => {
                    let path = root.join(path);
                    if let Some(parent) = path.parent() {
                        self.emitter.create_dir_all(parent)?;
                    }
                    self.emitter.write_file(&path, content)?;
                    report.files_written += 1;
                }
            }
        }

        Ok(report)
    }
}
