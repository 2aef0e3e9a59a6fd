//! Rendering of search outcomes as text or JSON.

use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;
use std::fmt::{self, Write as _};

use degrees_core::search::{Hop, SearchOutcome, SearchStats};
use degrees_core::ActorId;

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable trace.
    #[default]
    Text,
    /// Machine-readable JSON document.
    Json,
}

#[derive(Serialize)]
struct Report<'a> {
    status: &'static str,
    start: &'a ActorId,
    end: &'a ActorId,
    #[serde(skip_serializing_if = "Option::is_none")]
    degrees: Option<usize>,
    path: &'a [Hop],
    stats: &'a SearchStats,
}

/// Renders an outcome. `path` must be the reconstructed path when connected.
pub fn render(
    format: OutputFormat,
    outcome: &SearchOutcome,
    path: &[Hop],
    start: &ActorId,
    end: &ActorId,
    show_stats: bool,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(outcome, path, start, end, show_stats)?),
        OutputFormat::Json => render_json(outcome, path, start, end),
    }
}

fn render_text(
    outcome: &SearchOutcome,
    path: &[Hop],
    start: &ActorId,
    end: &ActorId,
    show_stats: bool,
) -> Result<String, fmt::Error> {
    let mut out = String::new();

    match outcome {
        SearchOutcome::Connected(sep) => {
            writeln!(
                out,
                "{} {}",
                "Degrees of Separation:".bold(),
                sep.degrees.to_string().green().bold()
            )?;
            for (i, hop) in path.iter().enumerate() {
                writeln!(out)?;
                writeln!(out, "{}. {} {}", i + 1, "Movie:".bold(), hop.movie.cyan())?;
                writeln!(out, "   {}: {}", hop.predecessor_role, hop.predecessor)?;
                writeln!(out, "   {}: {}", hop.discovered_role, hop.discovered)?;
            }
        }
        SearchOutcome::NotConnected { .. } => {
            writeln!(
                out,
                "{}",
                format!("No connection found between {start} and {end}.").yellow()
            )?;
        }
        SearchOutcome::DepthLimitReached { degrees, .. } => {
            writeln!(
                out,
                "{}",
                format!("No connection found within {degrees} degrees.").yellow()
            )?;
        }
    }

    if show_stats {
        let stats = outcome.stats();
        writeln!(out)?;
        writeln!(
            out,
            "{} {} levels, {} actors expanded, {} movies fetched ({} unavailable), {} actors discovered",
            "Stats:".dimmed(),
            stats.levels,
            stats.actors_expanded,
            stats.movies_fetched,
            stats.movies_unavailable,
            stats.actors_discovered
        )?;
    }

    Ok(out)
}

fn render_json(
    outcome: &SearchOutcome,
    path: &[Hop],
    start: &ActorId,
    end: &ActorId,
) -> anyhow::Result<String> {
    let status = match outcome {
        SearchOutcome::Connected(_) => "connected",
        SearchOutcome::NotConnected { .. } => "not_connected",
        SearchOutcome::DepthLimitReached { .. } => "depth_limit_reached",
    };
    let report = Report {
        status,
        start,
        end,
        degrees: outcome.degrees(),
        path,
        stats: outcome.stats(),
    };
    let mut json = serde_json::to_string_pretty(&report)?;
    json.push('\n');
    Ok(json)
}
