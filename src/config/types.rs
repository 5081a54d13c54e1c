use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::graph::DANGLING_OUT_DEGREE;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankSettings {
    #[serde(default = "default_damping")]
    pub damping: f64,
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
    #[serde(default)]
    pub parallel: bool,
    #[serde(default = "default_dangling_out_degree")]
    pub dangling_out_degree: f64,
}

impl Default for RankSettings {
    fn default() -> Self {
        Self {
            damping: default_damping(),
            threshold: default_threshold(),
            max_iterations: default_max_iterations(),
            parallel: false,
            dangling_out_degree: default_dangling_out_degree(),
        }
    }
}

const fn default_damping() -> f64 { 0.85 }
const fn default_threshold() -> f64 { 0.000_01 }
const fn default_max_iterations() -> usize { 1000 }
const fn default_dangling_out_degree() -> f64 { DANGLING_OUT_DEGREE }

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathSettings {
    #[serde(default = "default_collection")]
    pub collection: String,
    #[serde(default = "default_document_extension")]
    pub document_extension: String,
    #[serde(default = "default_output")]
    pub output: String,
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            collection: default_collection(),
            document_extension: default_document_extension(),
            output: default_output(),
        }
    }
}

fn default_collection() -> String { "collection.txt".to_string() }
fn default_document_extension() -> String { ".txt".to_string() }
fn default_output() -> String { "pagerankList.txt".to_string() }

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub verbose: bool,
    /// Rows shown in the console summary; 0 disables it.
    #[serde(default = "default_summary_rows")]
    pub summary_rows: usize,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            verbose: false,
            summary_rows: default_summary_rows(),
        }
    }
}

const fn default_summary_rows() -> usize { 10 }

/// On-disk shape of `linkrank.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LinkRankToml {
    #[serde(default)]
    pub rank: RankSettings,
    #[serde(default)]
    pub paths: PathSettings,
    #[serde(default)]
    pub preferences: Preferences,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Directory the collection and documents are read from.
    pub base_dir: PathBuf,
    pub rank: RankSettings,
    pub paths: PathSettings,
    pub preferences: Preferences,
}
