//! Command implementations and dispatch.

pub mod check;
pub mod init;
pub mod jobs;
pub mod score;
pub mod status;

use std::process::ExitCode;

use jobfit_config::ConfigWarning;

use super::{args::Commands, context::CommandContext, output::dim};

/// Dispatches to the selected subcommand.
pub fn run(command: &Commands, ctx: &CommandContext) -> ExitCode {
    match command {
        Commands::Score(cmd) => score::run(ctx, cmd),
        Commands::Jobs(cmd) => jobs::run(ctx, cmd),
        Commands::Init(cmd) => init::run(ctx, cmd),
        Commands::Check => check::run(ctx),
        Commands::Status => status::run(ctx),
    }
}

/// Returns true for commands that must run even when the config is broken.
pub fn skips_config(command: &Commands) -> bool {
    matches!(command, Commands::Init(_) | Commands::Check | Commands::Status)
}

/// Prints hints for resolving common warnings.
fn print_hints(warnings: &[ConfigWarning]) {
    let mut hints = Vec::new();

    for warning in warnings {
        match warning {
            ConfigWarning::NoCatalogDefined => {
                hints.push("Add a [catalog] section with a path to your job catalog.");
            }
            ConfigWarning::CatalogPathMissing { .. } => {
                hints.push("Create the catalog file or update [catalog] path.");
            }
            ConfigWarning::CatalogPathNotFile { .. } => {
                hints.push("The catalog path must point to a TOML file, not a directory.");
            }
            ConfigWarning::ZeroDimensions => {
                hints.push("Set [scorer] dimensions to a positive number, e.g. 256.");
            }
        }
    }

    hints.sort_unstable();
    hints.dedup();

    for hint in hints {
        println!("{}", dim(&format!("Hint: {hint}")));
    }
}
