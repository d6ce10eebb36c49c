//! Command-line interface for `jobfit`.

mod cli;

use std::process::ExitCode;

use clap::Parser;
use cli::{
    CommandContext,
    args::Cli,
    commands::{self, skips_config},
};
use jobfit::logging;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let loaded = if skips_config(&cli.command) {
        CommandContext::load_cwd_only()
    } else {
        CommandContext::load()
    };
    let ctx = match loaded {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };

    commands::run(&cli.command, &ctx)
}
