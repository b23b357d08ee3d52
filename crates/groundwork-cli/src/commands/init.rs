//! `groundwork init` — insert a starter configuration block.
//!
//! The block is derived from the schema registry, so it can never drift from
//! what the validator accepts: each field gets a comment listing its allowed
//! values and a default (the field's first allowed value).

use std::fmt::Write as _;

use tracing::instrument;

use groundwork_core::domain::{DEFAULT_END_MARKER, DEFAULT_START_MARKER, SCHEMA};

use crate::{
    cli::{InitArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Execute the `groundwork init` command.
#[instrument(skip_all)]
pub fn execute(
    args: InitArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let document_path = super::resolve_document(&args.source, &config);
    let block = starter_block();

    let updated = match std::fs::read_to_string(&document_path) {
        Ok(existing) => {
            if existing.contains(DEFAULT_START_MARKER) {
                if !args.force {
                    return Err(CliError::BlockExists {
                        path: document_path,
                    });
                }
                output.warning("Replacing existing configuration block")?;
                replace_block(&existing, &block)
            } else {
                // Append to an existing document.
                let mut out = existing;
                if !out.ends_with('\n') {
                    out.push('\n');
                }
                out.push('\n');
                out.push_str(&block);
                out
            }
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            format!("# My Project\n\n{block}")
        }
        Err(e) => {
            return Err(CliError::IoError {
                message: format!("failed to read '{}'", document_path.display()),
                source: e,
            });
        }
    };

    std::fs::write(&document_path, &updated)
        .with_cli_context(|| format!("failed to write '{}'", document_path.display()))?;

    output.success(&format!(
        "Configuration block written to {}",
        document_path.display()
    ))?;
    output.print("Edit the values, then run 'groundwork check' to validate.")?;

    Ok(())
}

/// Build the starter block from the schema registry.
fn starter_block() -> String {
    let mut block = String::new();
    block.push_str(DEFAULT_START_MARKER);
    block.push('\n');

    for field in SCHEMA {
        // Unreachable in practice: every field declares at least one value.
        let default = field.allowed.first().copied().unwrap_or("");
        let _ = writeln!(
            block,
            "<!-- {}: one of {} -->",
            field.field,
            field.allowed.join(", ")
        );
        let _ = writeln!(block, "{}: {}", field.field, default);
    }

    block.push_str(DEFAULT_END_MARKER);
    block.push('\n');
    block
}

/// Replace the region from the start marker through the end marker.
///
/// Falls back to appending when the end marker is missing (a broken block
/// the user asked to overwrite with --force).
fn replace_block(existing: &str, block: &str) -> String {
    let Some(start) = existing.find(DEFAULT_START_MARKER) else {
        return format!("{existing}\n{block}");
    };

    match existing[start..].find(DEFAULT_END_MARKER) {
        Some(end_offset) => {
            let end = start + end_offset + DEFAULT_END_MARKER.len();
            let mut out = String::new();
            out.push_str(&existing[..start]);
            // `block` carries its own trailing newline; strip the one the
            // old block's tail would duplicate.
            out.push_str(block.trim_end_matches('\n'));
            out.push_str(&existing[end..]);
            out
        }
        None => format!("{}\n{block}", &existing[..start].trim_end()),
    }
}
