//! Implementation of the `groundwork plan` command.
//!
//! Shows the deterministic action plan for a valid configuration without
//! generating any content.

use tracing::instrument;

use groundwork_core::domain::{extract, plan, validate};

use crate::{
    cli::{PlanArgs, ReportFormat, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `groundwork plan` command.
#[instrument(skip_all)]
pub fn execute(
    args: PlanArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let document_path = super::resolve_document(&args.source, &config);
    let document = super::read_document(&document_path)?;

    let raw = extract(&document, &config.markers()).map_err(|e| CliError::Core(e.into()))?;
    let validated = validate(&raw).map_err(|e| CliError::Core(e.into()))?;
    let actions = plan(&validated);

    match args.format {
        ReportFormat::Table => {
            output.header(&format!(
                "Plan for {} {} project ({} actions):",
                validated.language(),
                validated.project_type(),
                actions.len()
            ))?;
            for action in &actions {
                let detail = describe(&action.params);
                if detail.is_empty() {
                    output.print(&format!("  {}", action.generator))?;
                } else {
                    output.print(&format!("  {:<20} {detail}", action.generator.to_string()))?;
                }
            }
        }
        ReportFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&actions)?);
        }
    }

    Ok(())
}

/// One-line summary of the parameters that matter for display.
fn describe(params: &groundwork_core::domain::GeneratorParams) -> String {
    let mut parts = Vec::new();
    if !params.directories.is_empty() {
        parts.push(format!("{} directories", params.directories.len()));
    }
    if let Some(language) = params.language {
        parts.push(format!("language={language}"));
    }
    if let Some(framework) = params.framework {
        parts.push(format!("framework={framework}"));
    }
    if let Some(deployment) = params.deployment {
        parts.push(format!("deployment={deployment}"));
    }
    if let Some(testing) = params.testing {
        parts.push(format!("testing={testing}"));
    }
    parts.join(", ")
}
