//! Implementation of the `groundwork generate` command.
//!
//! Responsibility: read the document, run the core pipeline with the
//! built-in generators and the local emitter, and display results.

use tracing::{debug, info, instrument};

use groundwork_adapters::{LocalEmitter, builtin_registry};
use groundwork_core::{application::ScaffoldPipeline, domain::Artifact};

use crate::{
    cli::{GenerateArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `groundwork generate` command.
///
/// Dispatch sequence:
/// 1. Resolve document and output paths
/// 2. Read the document
/// 3. Dry run: render in memory and describe, write nothing
/// 4. Otherwise scaffold through the local emitter
/// 5. Print a summary
#[instrument(skip_all)]
pub fn execute(
    args: GenerateArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let document_path = super::resolve_document(&args.source, &config);
    let output_dir = args
        .output
        .unwrap_or_else(|| config.output.directory.clone());
    let markers = config.markers();

    debug!(
        document = %document_path.display(),
        output = %output_dir.display(),
        dry_run = args.dry_run,
        "generate invoked"
    );

    let document = super::read_document(&document_path)?;

    let pipeline = ScaffoldPipeline::new(builtin_registry(), Box::new(LocalEmitter::new()));

    if args.dry_run {
        let rendered = pipeline.render(&document, &markers).map_err(CliError::Core)?;

        output.info(&format!(
            "Dry run: would create {} artifact(s) in {}",
            rendered.artifacts.len(),
            output_dir.display(),
        ))?;
        for artifact in rendered.artifacts.entries() {
            match artifact {
                Artifact::Directory { path } => output.print(&format!("  dir   {}", path.display()))?,
                Artifact::File { path, .. } => output.print(&format!("  file  {}", path.display()))?,
            }
        }
        return Ok(());
    }

    output.header(&format!(
        "Generating project skeleton in {}...",
        output_dir.display()
    ))?;
    info!(document = %document_path.display(), "scaffold started");

    let report = pipeline
        .scaffold(&document, &markers, &output_dir)
        .map_err(CliError::Core)?;

    output.success(&format!(
        "Created {} directories and {} files",
        report.directories_created, report.files_written,
    ))?;

    if !output.is_quiet() {
        output.print("")?;
        output.print("Next steps:")?;
        output.print("  git init && git add .")?;
        output.print("  # Start building!")?;
    }

    Ok(())
}
