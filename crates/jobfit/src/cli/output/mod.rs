//! Rendering and JSON serialization for CLI output.

use std::process::ExitCode;

use comfy_table::{Cell, CellAlignment, Table, presets::UTF8_FULL_CONDENSED};
use jobfit::{Catalog, Job};
use jobfit_rank::ScoredDocument;
use serde::Serialize;

/// ANSI color codes for terminal output.
mod colors {
    /// Bold text.
    pub const BOLD: &str = "\x1b[1m";
    /// Cyan text (for headers).
    pub const CYAN: &str = "\x1b[36m";
    /// Yellow text (for warnings).
    pub const YELLOW: &str = "\x1b[33m";
    /// Dim text.
    pub const DIM: &str = "\x1b[2m";
    /// Reset all attributes.
    pub const RESET: &str = "\x1b[0m";
}

/// Formats text as a header (bold cyan).
pub fn header(text: &str) -> String {
    format!("{}{}{}{}", colors::BOLD, colors::CYAN, text, colors::RESET)
}

/// Formats text as a subheader (bold).
pub fn subheader(text: &str) -> String {
    format!("{}{}{}", colors::BOLD, text, colors::RESET)
}

/// Formats text as dimmed/less important.
pub fn dim(text: &str) -> String {
    format!("{}{}{}", colors::DIM, text, colors::RESET)
}

/// Formats text as a warning (yellow).
pub fn warning(text: &str) -> String {
    format!("{}{}{}", colors::YELLOW, text, colors::RESET)
}

/// Returns a dimmed horizontal rule for visual separation.
pub fn rule(width: usize) -> String {
    dim(&"─".repeat(width))
}

/// One row of a ranking, as shown in tables and JSON.
#[derive(Debug, Serialize)]
pub struct RankedJob {
    /// 1-based position in the ranking.
    pub rank: usize,
    /// Job id.
    pub id: String,
    /// Job title.
    pub title: String,
    /// Hiring organisation, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employer: Option<String>,
    /// Similarity score in `[0, 100]`.
    pub score: u8,
}

/// JSON output for `jobfit score`.
#[derive(Serialize)]
pub struct JsonScoreOutput<'a> {
    /// Where the CV was read from.
    pub cv: &'a str,
    /// Where the catalog was loaded from.
    pub catalog: &'a str,
    /// Scorer backend name.
    pub backend: &'a str,
    /// Every scored job, best first.
    pub results: &'a [RankedJob],
}

/// Pairs scored documents with catalog metadata, numbering them best-first.
pub fn ranked_jobs(scored: &[ScoredDocument], catalog: &Catalog) -> Vec<RankedJob> {
    scored
        .iter()
        .enumerate()
        .map(|(i, doc)| RankedJob {
            rank: i + 1,
            id: doc.id().to_string(),
            title: doc.title().to_string(),
            employer: catalog.get(doc.id()).and_then(|job| job.employer.clone()),
            score: doc.score,
        })
        .collect()
}

/// Builds the ranking table, truncated to `limit` rows (0 = all).
pub fn ranking_table(rows: &[RankedJob], limit: usize) -> Table {
    let shown = if limit == 0 { rows.len() } else { limit.min(rows.len()) };

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["#", "ID", "Title", "Employer", "Score"]);
    for row in &rows[..shown] {
        table.add_row(vec![
            Cell::new(row.rank).set_alignment(CellAlignment::Right),
            Cell::new(&row.id),
            Cell::new(&row.title),
            Cell::new(row.employer.as_deref().unwrap_or("")),
            Cell::new(row.score).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

/// Builds the catalog listing table.
pub fn jobs_table(jobs: &[Job]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["ID", "Title", "Employer"]);
    for job in jobs {
        table.add_row(vec![
            Cell::new(&job.id),
            Cell::new(&job.title),
            Cell::new(job.employer.as_deref().unwrap_or("")),
        ]);
    }
    table
}

/// Prints a value as pretty JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json_str) => {
            println!("{json_str}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            ExitCode::FAILURE
        }
    }
}
