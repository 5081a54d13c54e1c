// src/cli/mod.rs
//! CLI command handlers.

pub mod args;
pub mod handlers;

pub use args::Cli;

use crate::exit::LinkRankExit;

/// Dispatches a parsed command line.
///
/// # Errors
/// Propagates handler errors.
pub fn execute(cli: &Cli) -> anyhow::Result<LinkRankExit> {
    if cli.init {
        handlers::handle_init(&cli.dir)
    } else {
        handlers::handle_rank(cli)
    }
}
