//! Clap argument definitions for the `jobfit` CLI.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use jobfit_config::Backend;

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "jobfit")]
#[command(about = "Rank job descriptions against a CV by text similarity")]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug logging on stderr)
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Shared catalog selection flag.
#[derive(Args, Debug, Clone, Default)]
pub struct CatalogArgs {
    /// Job catalog TOML file (overrides [catalog] path in .jobfit.toml)
    #[arg(short = 'c', long)]
    pub catalog: Option<PathBuf>,
}

/// Arguments for `jobfit score`.
#[derive(Args, Debug, Clone)]
pub struct ScoreCommand {
    /// Plain-text CV file, or - to read standard input
    pub cv: String,

    #[command(flatten)]
    /// Catalog selection.
    pub catalog: CatalogArgs,

    /// Scoring backend: tfidf or embedding [default: from config, else tfidf]
    #[arg(short = 'b', long)]
    pub backend: Option<Backend>,

    /// Maximum rows to show, 0 for all [default: from config, else 10]
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Score only these job ids (can be specified multiple times)
    #[arg(long = "only", value_name = "ID")]
    pub only: Vec<String>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `jobfit jobs`.
#[derive(Args, Debug, Clone)]
pub struct JobsCommand {
    #[command(flatten)]
    /// Catalog selection.
    pub catalog: CatalogArgs,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `jobfit init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.jobfit.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Supported `jobfit` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Score a CV against every job in the catalog
    Score(ScoreCommand),

    /// List the jobs in the catalog
    Jobs(JobsCommand),

    /// Initialize jobfit configuration in current directory
    Init(InitCommand),

    /// Validate configuration and diagnose issues
    Check,

    /// Show configuration files and effective settings
    Status,
}
