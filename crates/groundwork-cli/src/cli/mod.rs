//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "groundwork",
    bin_name = "groundwork",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f3d7} README-driven project scaffolding",
    long_about = "Groundwork reads the configuration block embedded in your \
                  README and generates the matching project skeleton: \
                  directories, manifests, CI workflows, ignore files.",
    after_help = "EXAMPLES:\n\
        \x20 groundwork generate\n\
        \x20 groundwork generate --document docs/SETUP.md --output ./my-app\n\
        \x20 groundwork check\n\
        \x20 groundwork plan --format json\n\
        \x20 groundwork init",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate the project skeleton from the document's config block.
    #[command(
        visible_alias = "g",
        about = "Generate the project skeleton",
        after_help = "EXAMPLES:\n\
            \x20 groundwork generate\n\
            \x20 groundwork generate --document README.md --output .\n\
            \x20 groundwork generate --dry-run"
    )]
    Generate(GenerateArgs),

    /// Validate the config block and report every violation.
    #[command(
        about = "Validate the configuration block",
        after_help = "EXAMPLES:\n\
            \x20 groundwork check\n\
            \x20 groundwork check --document docs/SETUP.md --format json"
    )]
    Check(CheckArgs),

    /// Show the generation plan without producing any content.
    #[command(
        about = "Show the generation plan",
        after_help = "EXAMPLES:\n\
            \x20 groundwork plan\n\
            \x20 groundwork plan --format json"
    )]
    Plan(PlanArgs),

    /// Insert a starter configuration block into the document.
    #[command(
        about = "Insert a starter configuration block",
        after_help = "EXAMPLES:\n\
            \x20 groundwork init            # appends to ./README.md\n\
            \x20 groundwork init --document docs/SETUP.md\n\
            \x20 groundwork init --force    # replace an existing block"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 groundwork completions bash > ~/.local/share/bash-completion/completions/groundwork\n\
            \x20 groundwork completions zsh  > ~/.zfunc/_groundwork\n\
            \x20 groundwork completions fish > ~/.config/fish/completions/groundwork.fish"
    )]
    Completions(CompletionsArgs),
}

// ── Shared document argument ──────────────────────────────────────────────────

/// Source-document selection, shared by generate/check/plan/init.
#[derive(Debug, Args)]
pub struct DocumentArgs {
    /// Document carrying the configuration block.
    #[arg(
        short = 'd',
        long = "document",
        value_name = "FILE",
        help = "Document containing the configuration block (default: README.md)"
    )]
    pub document: Option<PathBuf>,
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `groundwork generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub source: DocumentArgs,

    /// Output directory for the generated skeleton.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Output directory (default: current directory)"
    )]
    pub output: Option<PathBuf>,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── check ─────────────────────────────────────────────────────────────────────

/// Arguments for `groundwork check`.
#[derive(Debug, Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub source: DocumentArgs,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ReportFormat,
}

// ── plan ──────────────────────────────────────────────────────────────────────

/// Arguments for `groundwork plan`.
#[derive(Debug, Args)]
pub struct PlanArgs {
    #[command(flatten)]
    pub source: DocumentArgs,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ReportFormat,
}

/// Output format for `check` and `plan`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable listing.
    Table,
    /// JSON to stdout (parseable in pipes).
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `groundwork init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    #[command(flatten)]
    pub source: DocumentArgs,

    /// Replace an existing configuration block.
    #[arg(short = 'f', long = "force", help = "Overwrite an existing block")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `groundwork completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
