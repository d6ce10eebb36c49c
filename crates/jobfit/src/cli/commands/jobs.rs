//! Implementation of `jobfit jobs`.

use std::process::ExitCode;

use crate::cli::{
    args::JobsCommand,
    context::CommandContext,
    output::{dim, jobs_table, print_json},
};

/// Lists the jobs in the active catalog.
pub fn run(ctx: &CommandContext, cmd: &JobsCommand) -> ExitCode {
    let loaded = match ctx.load_catalog(cmd.catalog.catalog.as_deref()) {
        Ok(loaded) => loaded,
        Err(code) => return code,
    };

    if cmd.json {
        return print_json(loaded.catalog.jobs());
    }

    if loaded.catalog.is_empty() {
        println!("{}", dim("No jobs in catalog."));
        return ExitCode::SUCCESS;
    }

    println!("{}", jobs_table(loaded.catalog.jobs()));
    println!(
        "{}",
        dim(&format!("{} jobs from {}", loaded.catalog.len(), loaded.source))
    );
    ExitCode::SUCCESS
}
