//! Implementation of the `groundwork check` command.
//!
//! Extraction + validation only: prints the validated configuration, or
//! every violation at once so one edit fixes them all.

use tracing::instrument;

use groundwork_core::domain::{DomainError, extract, validate, violations};

use crate::{
    cli::{CheckArgs, ReportFormat, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `groundwork check` command.
#[instrument(skip_all)]
pub fn execute(
    args: CheckArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let document_path = super::resolve_document(&args.source, &config);
    let document = super::read_document(&document_path)?;

    let raw = extract(&document, &config.markers()).map_err(|e| CliError::Core(e.into()))?;
    let found = violations(&raw);

    if found.is_empty() {
        let validated = validate(&raw).map_err(|e| CliError::Core(e.into()))?;
        match args.format {
            ReportFormat::Table => {
                output.success(&format!(
                    "Configuration in '{}' is valid",
                    document_path.display()
                ))?;
                for (field, value) in validated.entries() {
                    output.print(&format!("  {:<14} {value}", field.as_str()))?;
                }
            }
            ReportFormat::Json => {
                // Bypasses OutputManager because JSON output must be
                // parseable even in non-TTY pipes.
                let json = serde_json::json!({ "valid": true, "config": validated });
                println!("{}", serde_json::to_string_pretty(&json)?);
            }
        }
        return Ok(());
    }

    match args.format {
        ReportFormat::Table => {
            output.error(&format!(
                "Configuration in '{}' has {} violation(s):",
                document_path.display(),
                found.len()
            ))?;
            for violation in &found {
                output.print(&format!("  • {violation}"))?;
            }
        }
        ReportFormat::Json => {
            let json = serde_json::json!({ "valid": false, "violations": &found });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }

    Err(CliError::Core(
        DomainError::ConfigurationInvalid { violations: found }.into(),
    ))
}
