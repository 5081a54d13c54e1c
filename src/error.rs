// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RankError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("vertex {vertex} is out of range for a graph of {count} vertices")]
    InvalidVertex { vertex: usize, count: usize },

    #[error("cannot allocate adjacency matrix for {vertices} vertices")]
    Allocation { vertices: usize },

    #[error("invalid {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, RankError>;

impl RankError {
    /// Wraps an I/O failure together with the file it happened on.
    pub fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        RankError::Io {
            source,
            path: path.into(),
        }
    }
}

impl From<toml::de::Error> for RankError {
    fn from(e: toml::de::Error) -> Self {
        RankError::Config(e.to_string())
    }
}
