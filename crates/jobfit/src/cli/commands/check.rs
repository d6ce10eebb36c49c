//! Implementation of `jobfit check`.

use std::process::ExitCode;

use jobfit::Catalog;
use super::print_hints;
use crate::cli::context::{
    CommandContext, discover_configs_or_failure, merge_configs_or_failure,
};

/// Exit codes for `jobfit check`.
mod exit_codes {
    use std::process::ExitCode;

    /// Configuration is valid with no warnings.
    pub const OK: ExitCode = ExitCode::SUCCESS;
    /// Configuration has warnings but is usable.
    pub const WARNINGS: ExitCode = ExitCode::FAILURE;
    /// Configuration has errors and cannot be used.
    pub const ERROR: ExitCode = ExitCode::FAILURE;
}

/// Validates configuration and the configured catalog.
pub fn run(ctx: &CommandContext) -> ExitCode {
    println!("Checking configuration...");
    println!();

    let Ok(config_files) = discover_configs_or_failure(&ctx.cwd) else {
        return exit_codes::ERROR;
    };

    if config_files.is_empty() {
        println!("No configuration files found.");
        println!();
        println!("Run 'jobfit init' to create a configuration file.");
        return exit_codes::OK;
    }

    println!("Config files:");
    for parsed in &config_files {
        println!("  {}", parsed.path.display());
    }
    println!();

    let config = match merge_configs_or_failure(&config_files) {
        Ok(config) => config,
        Err(_) => return exit_codes::ERROR,
    };

    let warnings = config.validate();

    // Only parse the catalog when the path itself looks usable
    if let Some(path) = &config.catalog
        && path.is_file()
    {
        match Catalog::load(path) {
            Ok(catalog) => println!("Catalog: {} jobs in {}", catalog.len(), path.display()),
            Err(e) => {
                eprintln!("error: {e}");
                return exit_codes::ERROR;
            }
        }
        println!();
    }

    if warnings.is_empty() {
        println!("No issues found.");
        return exit_codes::OK;
    }

    println!("Warnings ({}):", warnings.len());
    for warning in &warnings {
        println!("  - {warning}");
    }
    println!();

    print_hints(&warnings);

    exit_codes::WARNINGS
}
