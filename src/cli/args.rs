use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "linkrank",
    version,
    about = "Rank linked documents with a simplified PageRank",
    allow_negative_numbers = true
)]
pub struct Cli {
    /// Damping factor, strictly between 0 and 1
    #[arg(value_name = "DAMPING")]
    pub damping: Option<f64>,
    /// Stop once the total score change drops below this value
    #[arg(value_name = "THRESHOLD")]
    pub threshold: Option<f64>,
    /// Upper bound on iterations
    #[arg(value_name = "MAX_ITERATIONS")]
    pub max_iterations: Option<usize>,
    /// Directory holding the collection and document files
    #[arg(long, short, value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,
    /// Config file to use instead of DIR/linkrank.toml
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Report file to write instead of the configured one
    #[arg(long, short, value_name = "FILE")]
    pub output: Option<PathBuf>,
    /// Rows shown in the console summary (0 disables it)
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,
    /// Update scores on all cores
    #[arg(long)]
    pub parallel: bool,
    #[arg(long, short)]
    pub verbose: bool,
    /// Write a default linkrank.toml into DIR and exit
    #[arg(long)]
    pub init: bool,
}
