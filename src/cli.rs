//! CLI argument parsing.
//!
//! Global rendering flags live on the root command and are marked global so
//! they can be given before or after the subcommand.
use crate::config::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Host file used by `inject` when `--file` is not given.
pub const DEFAULT_HOST_FILE: &str = "README.md";

#[derive(Parser, Debug)]
#[command(
    name = "actdocs",
    version,
    about = "Generate documentation for GitHub Actions custom actions and reusable workflows",
    after_help = "Commands:\n  generate <path>                 Print documentation for an action or workflow\n  inject --file <host> <path>     Replace marked regions of a Markdown file\n\nExamples:\n  actdocs generate --sort action.yml\n  actdocs generate --format json .github/workflows/release.yml\n  actdocs inject --file README.md --dry-run action.yml",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct RootArgs {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Markdown)]
    pub format: OutputFormat,

    /// Omit sections that have nothing to show
    #[arg(long, global = true)]
    pub omit: bool,

    /// Sort required rows first, then by name
    #[arg(long, global = true)]
    pub sort: bool,

    /// Sort rows by name
    #[arg(long, global = true)]
    pub sort_by_name: bool,

    /// Move required rows ahead of optional ones, keeping their order
    #[arg(long, global = true)]
    pub sort_by_required: bool,

    /// Mirror debug logs to stderr (also enabled by ACTDOCS_DEBUG)
    #[arg(long, global = true)]
    pub debug: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    Generate(GenerateArgs),
    Inject(InjectArgs),
}

#[derive(Parser, Debug)]
#[command(about = "Print documentation for an action or reusable workflow")]
pub struct GenerateArgs {
    /// Path to action.yml or a reusable workflow file
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,
}

#[derive(Parser, Debug)]
#[command(about = "Inject documentation into a Markdown file between actdocs markers")]
pub struct InjectArgs {
    /// Markdown file to update
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_HOST_FILE)]
    pub file: PathBuf,

    /// Print the updated file instead of writing it
    #[arg(long)]
    pub dry_run: bool,

    /// Path to action.yml or a reusable workflow file
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,
}
