//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "appguard",
    bin_name = "appguard",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Admission validator for application definitions",
    long_about = "appguard checks application definition documents for \
                  duplicate IDs, dangling role/service references and \
                  missing images or URL schemes, and answers admission \
                  reviews with an allow/deny decision.",
    after_help = "EXAMPLES:\n\
        \x20 appguard check app.json\n\
        \x20 appguard check ./definitions --output-format json\n\
        \x20 appguard review < review.json\n\
        \x20 appguard rules role-properties",
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
    /// Validate application definition documents.
    #[command(
        visible_alias = "c",
        about = "Validate documents",
        after_help = "EXAMPLES:\n\
            \x20 appguard check app.json other.json\n\
            \x20 appguard check ./definitions\n\
            \x20 appguard check app.json --output-format json"
    )]
    Check(CheckArgs),

    /// Answer an AdmissionReview.
    #[command(
        about = "Answer an AdmissionReview",
        after_help = "EXAMPLES:\n\
            \x20 appguard review review.json\n\
            \x20 cat review.json | appguard review"
    )]
    Review(ReviewArgs),

    /// Describe the validation rules.
    #[command(
        visible_alias = "ls",
        about = "List validation rules",
        after_help = "EXAMPLES:\n\
            \x20 appguard rules\n\
            \x20 appguard rules selected-roles"
    )]
    Rules(RulesArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 appguard completions bash > ~/.local/share/bash-completion/completions/appguard\n\
            \x20 appguard completions zsh  > ~/.zfunc/_appguard\n\
            \x20 appguard completions fish > ~/.config/fish/completions/appguard.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the appguard configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 appguard config show\n\
            \x20 appguard config path"
    )]
    Config(ConfigCommands),
}

// ── check ─────────────────────────────────────────────────────────────────────

/// Arguments for `appguard check`.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Document files or directories.  Directories are searched
    /// recursively for `*.json`.
    #[arg(
        value_name = "PATH",
        required = true,
        num_args = 1..,
        help = "Document files or directories"
    )]
    pub paths: Vec<PathBuf>,
}

// ── review ────────────────────────────────────────────────────────────────────

/// Arguments for `appguard review`.
#[derive(Debug, Args)]
pub struct ReviewArgs {
    /// AdmissionReview file; stdin when omitted or `-`.
    #[arg(value_name = "FILE", help = "AdmissionReview file (default: stdin)")]
    pub file: Option<PathBuf>,
}

// ── rules ─────────────────────────────────────────────────────────────────────

/// Arguments for `appguard rules`.
#[derive(Debug, Args)]
pub struct RulesArgs {
    /// Explain a single rule.
    #[arg(value_name = "NAME", help = "Rule to explain (e.g. role-properties)")]
    pub name: Option<String>,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `appguard completions`.
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

/// Subcommands for `appguard config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML.
    Show,
    /// Print the path of the configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
