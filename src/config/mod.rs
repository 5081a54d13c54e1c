// src/config/mod.rs
pub mod io;
pub mod types;

pub use self::io::CONFIG_FILE;
pub use self::types::{Config, LinkRankToml, PathSettings, Preferences, RankSettings};

use std::path::{Path, PathBuf};

use crate::error::{RankError, Result};
use crate::rank::PageRank;

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config rooted at `dir` and loads `dir/linkrank.toml` if present.
    ///
    /// # Errors
    /// Returns an error if the config file is unreadable or malformed.
    pub fn load(dir: &Path) -> Result<Self> {
        let mut config = Self::new();
        config.base_dir = dir.to_path_buf();
        io::load_toml_config(&mut config, &dir.join(CONFIG_FILE))?;
        Ok(config)
    }

    /// Loads an explicit config file, keeping `base_dir` untouched.
    ///
    /// # Errors
    /// Returns an error if the file is missing, unreadable or malformed.
    pub fn load_file(&mut self, path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(RankError::Config(format!(
                "config file not found: {}",
                path.display()
            )));
        }
        io::load_toml_config(self, path)
    }

    /// Parses TOML content into this config.
    ///
    /// # Errors
    /// Returns `RankError::Config` on malformed TOML.
    pub fn parse_toml(&mut self, content: &str) -> Result<()> {
        io::parse_toml(self, content)
    }

    /// Saves the file-backed sections to `dir/linkrank.toml`.
    ///
    /// # Errors
    /// Returns error if file write fails.
    pub fn save(&self, dir: &Path) -> Result<()> {
        io::save_to_file(self, &dir.join(CONFIG_FILE))
    }

    /// Validates the rank parameters before a run.
    ///
    /// # Errors
    /// Returns `RankError::InvalidParameter` naming the first bad field.
    pub fn validate(&self) -> Result<()> {
        let r = &self.rank;
        if !(r.damping > 0.0 && r.damping < 1.0) {
            return Err(invalid("damping", format!("{} is not in (0, 1)", r.damping)));
        }
        if !(r.threshold.is_finite() && r.threshold > 0.0) {
            return Err(invalid("threshold", format!("{} is not a positive number", r.threshold)));
        }
        if r.max_iterations == 0 {
            return Err(invalid("max_iterations", "must be at least 1".to_string()));
        }
        if !(r.dangling_out_degree.is_finite() && r.dangling_out_degree > 0.0) {
            return Err(invalid(
                "dangling_out_degree",
                format!("{} is not a positive number", r.dangling_out_degree),
            ));
        }
        if self.paths.collection.trim().is_empty() {
            return Err(invalid("collection", "path is empty".to_string()));
        }
        Ok(())
    }

    #[must_use]
    pub fn collection_path(&self) -> PathBuf {
        self.base_dir.join(&self.paths.collection)
    }

    #[must_use]
    pub fn document_path(&self, name: &str) -> PathBuf {
        self.base_dir
            .join(format!("{name}{}", self.paths.document_extension))
    }

    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        self.base_dir.join(&self.paths.output)
    }

    /// Engine settings derived from the `[rank]` section.
    #[must_use]
    pub fn page_rank(&self) -> PageRank {
        PageRank::new()
            .with_damping(self.rank.damping)
            .with_threshold(self.rank.threshold)
            .with_max_iterations(self.rank.max_iterations)
            .with_parallel(self.rank.parallel)
    }
}

fn invalid(name: &'static str, reason: String) -> RankError {
    RankError::InvalidParameter { name, reason }
}
