//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "traycraft",
    bin_name = "traycraft",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Menu-bar app scaffolding",
    long_about = "Traycraft turns a small project specification into a ready-to-build \
                  Tauri menu-bar application: manifests, icons, license and readme.",
    after_help = "EXAMPLES:\n\
        \x20 traycraft init\n\
        \x20 traycraft generate -y\n\
        \x20 traycraft generate --spec app.toml --root ./my-tray --dry-run\n\
        \x20 traycraft completions bash > /usr/share/bash-completion/completions/traycraft",
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
    /// Generate the project from its specification.
    #[command(
        visible_alias = "g",
        about = "Generate the project",
        after_help = "EXAMPLES:\n\
            \x20 traycraft generate\n\
            \x20 traycraft generate --spec .traycraft/spec.toml -y\n\
            \x20 traycraft generate --dry-run --output-format json"
    )]
    Generate(GenerateArgs),

    /// Write a sample specification.
    #[command(
        about = "Write a sample specification",
        after_help = "EXAMPLES:\n\
            \x20 traycraft init\n\
            \x20 traycraft init --force"
    )]
    Init(InitArgs),

    /// List what a run produces.
    #[command(
        visible_alias = "ls",
        about = "List generated artifacts and icon sizes",
        after_help = "EXAMPLES:\n\
            \x20 traycraft list\n\
            \x20 traycraft list --format json"
    )]
    List(ListArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 traycraft completions bash > ~/.local/share/bash-completion/completions/traycraft\n\
            \x20 traycraft completions zsh  > ~/.zfunc/_traycraft\n\
            \x20 traycraft completions fish > ~/.config/fish/completions/traycraft.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the effective configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 traycraft config get format.rustfmt\n\
            \x20 traycraft config list\n\
            \x20 traycraft config path"
    )]
    Config(ConfigCommands),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `traycraft generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Specification file (JSON or TOML).
    #[arg(
        short = 's',
        long = "spec",
        value_name = "FILE",
        help = "Specification file (default: .traycraft/spec.json, then .traycraft/spec.toml)"
    )]
    pub spec: Option<PathBuf>,

    /// Project root the outputs are written under.
    #[arg(
        short = 'r',
        long = "root",
        value_name = "DIR",
        help = "Project root (default: current directory)"
    )]
    pub root: Option<PathBuf>,

    /// Preview what would be written without touching disk.
    #[arg(long = "dry-run", help = "Show what would be generated without writing")]
    pub dry_run: bool,

    /// Pipe Rust sources through rustfmt.
    #[arg(long = "rustfmt", help = "Format generated Rust sources with rustfmt")]
    pub rustfmt: bool,

    /// Skip the overwrite confirmation.
    #[arg(short = 'y', long = "yes", help = "Assume yes when asked to overwrite")]
    pub yes: bool,

    /// Overwrite existing outputs without asking.
    #[arg(long = "force", help = "Overwrite existing files")]
    pub force: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `traycraft init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing specification.
    #[arg(short = 'f', long = "force", help = "Overwrite an existing specification")]
    pub force: bool,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `traycraft list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One path per line.
    List,
    /// JSON object.
    Json,
    /// CSV rows.
    Csv,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `traycraft completions`.
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

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `traycraft config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `format.rustfmt`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
