//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Config file (`--config`, else the default location)
//! 3. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use groundwork_core::domain::BlockMarkers;

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Source-document settings.
    pub document: DocumentConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentConfig {
    /// Default document to read when `--document` is not passed.
    pub path: PathBuf,
    /// Override the block start marker (advanced; defaults to the standard
    /// Groundwork marker).
    pub start_marker: Option<String>,
    /// Override the block end marker.
    pub end_marker: Option<String>,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("README.md"),
            start_marker: None,
            end_marker: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output directory when `--output` is not passed.
    pub directory: PathBuf,
    pub no_color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            no_color: false,
        }
    }
}

impl AppConfig {
    /// Load configuration.
    ///
    /// A path passed via `--config` must exist and parse; the default
    /// location is optional and silently falls back to built-in defaults.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        match config_file {
            Some(path) => Self::from_file(path),
            None => {
                let default = Self::config_path();
                if default.exists() {
                    Self::from_file(&default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("cannot read config '{}': {e}", path.display()))?;
        toml::from_str(&raw)
            .map_err(|e| anyhow::anyhow!("cannot parse config '{}': {e}", path.display()))
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.groundwork.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "groundwork-tool", "groundwork")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".groundwork.toml"))
    }

    /// Block markers, honouring any config-file overrides.
    pub fn markers(&self) -> BlockMarkers {
        let defaults = BlockMarkers::default();
        BlockMarkers {
            start: self
                .document
                .start_marker
                .clone()
                .unwrap_or(defaults.start),
            end: self.document.end_marker.clone().unwrap_or(defaults.end),
        }
    }
}
