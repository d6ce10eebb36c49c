//! Implementation of `jobfit status`.

use std::process::ExitCode;

use jobfit::DEMO_CATALOG_NAME;
use jobfit_config::ConfigScope;

use super::print_hints;
use crate::cli::{
    context::{CommandContext, discover_configs_or_failure, merge_configs_or_failure},
    output::{dim, header, rule, subheader, warning},
};

/// Shows configuration files, the active catalog, the scorer and effective settings.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let cwd = &ctx.cwd;

    let config_files = match discover_configs_or_failure(cwd) {
        Ok(found) => found,
        Err(code) => return code,
    };
    if config_files.is_empty() {
        println!("{}", dim("No configuration files found."));
        println!();
        println!(
            "Run {} to create a configuration file.",
            subheader("jobfit init")
        );
        return ExitCode::SUCCESS;
    }

    println!("{}", header("Configuration"));
    println!();
    println!("{}", subheader("Config files (highest precedence first):"));
    for parsed in &config_files {
        match parsed.scope {
            ConfigScope::Local => println!("   {}", parsed.path.display()),
            ConfigScope::Global => println!("   {} {}", parsed.path.display(), dim("(global)")),
        }
    }
    println!();

    let config = match merge_configs_or_failure(&config_files) {
        Ok(config) => config,
        Err(code) => return code,
    };

    println!("{}", subheader("Catalog:"));
    match &config.catalog {
        Some(path) if path.is_file() => println!("   {}", path.display()),
        Some(path) => println!("   {} {}", path.display(), warning("[missing]")),
        None => println!("   {}", dim(DEMO_CATALOG_NAME)),
    }
    println!();

    println!("{}", subheader("Scorer:"));
    println!(
        "   {} {}",
        config.scorer.backend,
        dim(&format!("({})", config.scorer.backend.description()))
    );
    println!();

    println!("{}", subheader("Effective settings:"));
    println!("{}", rule(40));
    match config.settings_to_toml() {
        Ok(toml) => print!("{toml}"),
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    }
    println!("{}", rule(40));

    let warnings = config.validate();
    if !warnings.is_empty() {
        println!();
        println!("{}", subheader(&format!("Warnings ({}):", warnings.len())));
        for w in &warnings {
            println!("   {}", warning(&w.to_string()));
        }
        println!();
        print_hints(&warnings);
    }

    ExitCode::SUCCESS
}
