//! Command implementations.
//!
//! Each command translates CLI arguments into core calls and displays
//! results.  No business logic lives here.

pub mod check;
pub mod completions;
pub mod generate;
pub mod init;
pub mod plan;

use std::path::{Path, PathBuf};

use crate::{
    cli::DocumentArgs,
    config::AppConfig,
    error::{CliError, CliResult},
};

/// The document path: `--document` wins, then the config file's default.
pub(crate) fn resolve_document(args: &DocumentArgs, config: &AppConfig) -> PathBuf {
    args.document
        .clone()
        .unwrap_or_else(|| config.document.path.clone())
}

/// Read the source document, turning a missing file into a dedicated error.
pub(crate) fn read_document(path: &Path) -> CliResult<String> {
    std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CliError::DocumentNotFound {
                path: path.to_path_buf(),
            }
        } else {
            CliError::IoError {
                message: format!("failed to read '{}'", path.display()),
                source: e,
            }
        }
    })
}
