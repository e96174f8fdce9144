//! CLI argument definitions
//!
//! All Clap derive structs for `starsite` command-line parsing.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use crate::content::loader::{DEFAULT_CONTENT_ROOT, DEFAULT_EXTENSION, LoaderOptions};
use crate::observability::LogFormat;
use crate::routes::DEFAULT_PREFIX;

// ============================================================================
// Root CLI
// ============================================================================

/// Content catalog for a static site of STAR-format career narratives.
#[derive(Parser, Debug)]
#[command(name = "starsite", author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output control.
    #[arg(long, default_value = "auto", global = true, env = "STARSITE_COLOR")]
    pub color: ColorChoice,

    /// Log line format.
    #[arg(long, default_value = "human", global = true, env = "STARSITE_LOG_FORMAT")]
    pub log_format: LogFormat,

    #[command(flatten)]
    pub content: ContentArgs,
}

/// Where narratives are read from.
#[derive(Args, Debug, Clone)]
pub struct ContentArgs {
    /// Directory containing one markdown file per narrative.
    #[arg(
        long = "content",
        default_value = DEFAULT_CONTENT_ROOT,
        global = true,
        env = "STARSITE_CONTENT_DIR"
    )]
    pub content_root: PathBuf,

    /// Extension of narrative files, without the dot.
    #[arg(
        long,
        default_value = DEFAULT_EXTENSION,
        global = true,
        env = "STARSITE_EXTENSION"
    )]
    pub extension: String,
}

impl ContentArgs {
    /// Converts the flags into loader options.
    #[must_use]
    pub fn loader_options(&self) -> LoaderOptions {
        LoaderOptions {
            content_root: self.content_root.clone(),
            extension: self.extension.trim_start_matches('.').to_string(),
        }
    }
}

// ============================================================================
// Top-Level Commands
// ============================================================================

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every narrative with the index of all tags.
    List(ListArgs),

    /// Show one published narrative.
    Show(ShowArgs),

    /// Print the routes a static export must prerender.
    Routes(RoutesArgs),

    /// Check every narrative file and report problems.
    Validate(ValidateArgs),

    /// Generate shell completion scripts.
    Completions(CompletionsArgs),

    /// Display version information.
    Version(VersionArgs),
}

/// Arguments for `list`.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only list narratives carrying this tag.
    #[arg(long)]
    pub tag: Option<String>,

    /// Hide narratives with `published: false`.
    #[arg(long)]
    pub published_only: bool,

    /// Ordering of the listing.
    #[arg(long, default_value = "slug")]
    pub sort: SortOrder,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

/// Arguments for `show`.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Narrative identifier (the file name without extension).
    pub identifier: String,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

/// Arguments for `routes`.
#[derive(Args, Debug)]
pub struct RoutesArgs {
    /// URL prefix of detail pages.
    #[arg(long, default_value = DEFAULT_PREFIX)]
    pub prefix: String,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

/// Arguments for `validate`.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Treat warnings as errors.
    #[arg(long)]
    pub strict: bool,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// Completions / Version
// ============================================================================

/// Arguments for shell completion generation.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell for completion script.
    pub shell: Shell,
}

/// Arguments for version display.
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

/// Listing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SortOrder {
    /// By identifier, ascending.
    #[default]
    Slug,
    /// By date, newest first; unrecognised dates last.
    Date,
    /// By title, case-insensitive.
    Title,
}

/// Shell type for completion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell.
    Bash,
    /// Zsh shell.
    Zsh,
    /// Fish shell.
    Fish,
    /// `PowerShell`.
    #[value(name = "powershell")]
    PowerShell,
    /// Elvish shell.
    Elvish,
}

// ============================================================================
// Tests
// ============================================================================
