// src/cli/handlers.rs
//! Command handlers for the `linkrank` binary.

use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

use super::args::Cli;
use crate::collection;
use crate::config::{Config, CONFIG_FILE};
use crate::exit::LinkRankExit;
use crate::rank::RankEngine;
use crate::report;

/// Runs the full pipeline: load, rank, write, summarize.
///
/// # Errors
/// Returns error if configuration is invalid or any file cannot be read or written.
pub fn handle_rank(cli: &Cli) -> Result<LinkRankExit> {
    let config = resolve_config(cli)?;
    let verbose = config.preferences.verbose;

    let coll = collection::load(&config).with_context(|| {
        format!("failed to load collection {}", config.collection_path().display())
    })?;
    if verbose {
        log_step(&format!(
            "Loaded {} documents, {} links",
            coll.len(),
            coll.graph.edge_count()
        ));
    }

    let settings = config.page_rank();
    let (result, rows) = RankEngine::rank(&settings, &coll.vertices, &coll.graph);
    if verbose {
        log_step(&format!(
            "{} iterations, delta {:.3e}, converged: {}",
            result.iterations, result.delta, result.converged
        ));
    }

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| config.output_path());
    report::write_report_file(&output, &rows)
        .with_context(|| format!("failed to write report {}", output.display()))?;
    if verbose {
        log_step(&format!("Wrote {}", output.display()));
    }

    report::print_summary(&rows, &result, config.preferences.summary_rows);
    Ok(LinkRankExit::Success)
}

/// Writes a default config into the target directory.
///
/// # Errors
/// Returns error if the file already exists or cannot be written.
pub fn handle_init(dir: &Path) -> Result<LinkRankExit> {
    let path = dir.join(CONFIG_FILE);
    if path.exists() {
        anyhow::bail!("{} already exists", path.display());
    }
    Config::new()
        .save(dir)
        .with_context(|| format!("failed to write {}", path.display()))?;
    eprintln!("{}", format!("Created {}", path.display()).dimmed());
    Ok(LinkRankExit::Success)
}

/// Builds the effective config: defaults, then the config file, then CLI flags.
///
/// # Errors
/// Returns error if the config file is malformed or the result fails validation.
pub fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load(&cli.dir)?;
    if let Some(path) = &cli.config {
        config.load_file(path)?;
    }
    apply_overrides(&mut config, cli);
    config.validate()?;
    Ok(config)
}

fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(d) = cli.damping {
        config.rank.damping = d;
    }
    if let Some(t) = cli.threshold {
        config.rank.threshold = t;
    }
    if let Some(m) = cli.max_iterations {
        config.rank.max_iterations = m;
    }
    if let Some(top) = cli.top {
        config.preferences.summary_rows = top;
    }
    config.rank.parallel |= cli.parallel;
    config.preferences.verbose |= cli.verbose;
}

fn log_step(msg: &str) {
    eprintln!("{} {}", "::".blue().bold(), msg.dimmed());
}
