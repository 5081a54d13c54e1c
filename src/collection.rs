// src/collection.rs
//! Loads a document collection from disk into a graph.
//!
//! The collection file lists document names separated by whitespace. Each
//! document `<name><ext>` is read as whitespace-separated tokens; a token equal
//! to another document's name is a link to it.

use std::fs;
use std::path::Path;

use crate::config::Config;
use crate::error::{RankError, Result};
use crate::graph::{Graph, GraphBuilder, VertexIndex};

/// Named vertices together with the link graph built over them.
pub struct Collection {
    pub vertices: VertexIndex,
    pub graph: Graph,
}

impl Collection {
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

/// Reads a file as whitespace-separated tokens.
///
/// Bytes that are not valid UTF-8 become U+FFFD inside their token; they never
/// fail the read.
///
/// # Errors
/// Returns `RankError::Io` naming the path if the file cannot be read.
pub fn read_tokens(path: &Path) -> Result<Vec<String>> {
    let bytes = fs::read(path).map_err(|e| RankError::io(e, path))?;
    Ok(String::from_utf8_lossy(&bytes)
        .split_whitespace()
        .map(str::to_string)
        .collect())
}

/// Reads the collection file and only the vertex names from it.
///
/// # Errors
/// Returns `RankError::Io` if the collection file is missing or unreadable.
pub fn load_vertices(config: &Config) -> Result<VertexIndex> {
    let names = read_tokens(&config.collection_path())?;
    Ok(VertexIndex::from_names(names))
}

/// Reads the collection and every document, building the link graph.
///
/// # Errors
/// Returns `RankError::Io` for a missing collection or document file, or an
/// allocation error for an oversized collection.
pub fn load(config: &Config) -> Result<Collection> {
    let vertices = load_vertices(config)?;
    let mut builder = GraphBuilder::new(&vertices)?
        .with_dangling_out_degree(config.rank.dangling_out_degree);

    for (source, name) in vertices.names().iter().enumerate() {
        let tokens = read_tokens(&config.document_path(name))?;
        builder.add_document(source, &tokens)?;
    }

    let graph = builder.finish();
    Ok(Collection { vertices, graph })
}
