//! Implementation of `jobfit score`.

use std::process::ExitCode;

use jobfit::{CvSource, build_scorer};
use tracing::info;

use crate::cli::{
    args::ScoreCommand,
    context::CommandContext,
    output::{JsonScoreOutput, dim, print_json, ranked_jobs, ranking_table},
};

/// Scores the CV against the catalog and prints the ranking.
pub fn run(ctx: &CommandContext, cmd: &ScoreCommand) -> ExitCode {
    let source = CvSource::from_arg(&cmd.cv);
    let cv = match source.read() {
        Ok(text) => text,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let loaded = match ctx.load_catalog(cmd.catalog.catalog.as_deref()) {
        Ok(loaded) => loaded,
        Err(code) => return code,
    };
    let catalog = match loaded.catalog.select(&cmd.only) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let scorer = match build_scorer(&ctx.config.scorer, cmd.backend) {
        Ok(scorer) => scorer,
        Err(e) => {
            eprintln!("error: failed to initialize scorer: {e}");
            return ExitCode::FAILURE;
        }
    };

    let scored = match scorer.score(&cv, &catalog.documents()) {
        Ok(scored) => scored,
        Err(e) => {
            eprintln!("error: scoring failed: {e}");
            return ExitCode::FAILURE;
        }
    };
    info!(jobs = scored.len(), backend = scorer.name(), "scored catalog");

    let rows = ranked_jobs(&scored, &catalog);

    if cmd.json {
        let source_name = source.to_string();
        return print_json(&JsonScoreOutput {
            cv: &source_name,
            catalog: &loaded.source,
            backend: scorer.name(),
            results: &rows,
        });
    }

    if rows.is_empty() {
        println!("No jobs to score.");
        return ExitCode::SUCCESS;
    }

    let limit = cmd.limit.unwrap_or(ctx.config.settings.limit);
    println!("{}", ranking_table(&rows, limit));
    if limit != 0 && rows.len() > limit {
        println!(
            "{}",
            dim(&format!(
                "Showing {limit} of {} jobs (use -n 0 to show all)",
                rows.len()
            ))
        );
    }

    ExitCode::SUCCESS
}
