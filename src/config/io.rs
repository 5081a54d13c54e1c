// src/config/io.rs
//! Reading and writing `linkrank.toml`.

use std::fs;
use std::path::Path;

use super::types::{Config, LinkRankToml};
use crate::error::{RankError, Result};

pub const CONFIG_FILE: &str = "linkrank.toml";

/// Loads `path` into `config` if the file exists. A missing file keeps the
/// current values.
///
/// # Errors
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_toml_config(config: &mut Config, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    let content = fs::read_to_string(path).map_err(|e| RankError::io(e, path))?;
    parse_toml(config, &content)
}

/// Replaces the file-backed sections of `config` with `content`.
///
/// # Errors
/// Returns `RankError::Config` on malformed TOML.
pub fn parse_toml(config: &mut Config, content: &str) -> Result<()> {
    let parsed: LinkRankToml = toml::from_str(content)?;
    config.rank = parsed.rank;
    config.paths = parsed.paths;
    config.preferences = parsed.preferences;
    Ok(())
}

/// Writes the file-backed sections of `config` to `path`.
///
/// # Errors
/// Returns error if serialization or the file write fails.
pub fn save_to_file(config: &Config, path: &Path) -> Result<()> {
    let doc = LinkRankToml {
        rank: config.rank.clone(),
        paths: config.paths.clone(),
        preferences: config.preferences.clone(),
    };
    let content = toml::to_string_pretty(&doc).map_err(|e| RankError::Config(e.to_string()))?;
    fs::write(path, content).map_err(|e| RankError::io(e, path))
}
