use clap::Parser;
use colored::Colorize;
use linkrank_core::cli::{self, Cli};
use linkrank_core::exit::LinkRankExit;

fn main() -> LinkRankExit {
    let cli = Cli::parse();

    match cli::execute(&cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {e:#}", "Error:".red());
            LinkRankExit::for_error(&e)
        }
    }
}
