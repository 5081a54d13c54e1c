// src/graph/builder.rs
//! Graph construction: vertex naming and edge population.

use std::collections::HashMap;

use super::store::{Graph, Vertex};
use crate::error::Result;

/// Weight recorded for every link; the graph only tracks presence.
const LINK_WEIGHT: u32 = 1;

/// Maps document names to vertex indices in first-appearance order.
#[derive(Debug, Clone, Default)]
pub struct VertexIndex {
    names: Vec<String>,
    index: HashMap<String, Vertex>,
}

impl VertexIndex {
    /// Builds the index from a token stream. A repeated name keeps its first
    /// position and does not create a second vertex.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut vi = Self::default();
        for name in names {
            vi.push(name.into());
        }
        vi
    }

    fn push(&mut self, name: String) {
        if self.index.contains_key(&name) {
            return;
        }
        self.index.insert(name.clone(), self.names.len());
        self.names.push(name);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<Vertex> {
        self.index.get(name).copied()
    }

    #[must_use]
    pub fn name(&self, v: Vertex) -> Option<&str> {
        self.names.get(v).map(String::as_str)
    }

    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

/// Populates a [`Graph`] from per-document token lists.
pub struct GraphBuilder<'a> {
    vertices: &'a VertexIndex,
    graph: Graph,
}

impl<'a> GraphBuilder<'a> {
    /// Allocates an empty graph with one vertex per indexed name.
    ///
    /// # Errors
    /// Returns an allocation error if the matrix cannot be created.
    pub fn new(vertices: &'a VertexIndex) -> Result<Self> {
        Ok(Self {
            vertices,
            graph: Graph::new(vertices.len())?,
        })
    }

    /// Overrides the dangling out-degree of the graph being built.
    #[must_use]
    pub fn with_dangling_out_degree(mut self, value: f64) -> Self {
        self.graph = self.graph.with_dangling_out_degree(value);
        self
    }

    /// Links `source` to every token naming another vertex.
    ///
    /// Tokens that name no vertex are skipped; self references and repeated
    /// links are no-ops. Returns the number of new edges.
    ///
    /// # Errors
    /// Returns `RankError::InvalidVertex` if `source` is out of range.
    pub fn add_document<I, S>(&mut self, source: Vertex, tokens: I) -> Result<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut added = 0;
        for token in tokens {
            let Some(target) = self.vertices.index_of(token.as_ref()) else {
                continue;
            };
            if self.graph.insert_edge(source, target, LINK_WEIGHT)? {
                added += 1;
            }
        }
        Ok(added)
    }

    #[must_use]
    pub fn finish(self) -> Graph {
        self.graph
    }
}

/// Builds a graph in one pass from `(source, tokens)` pairs.
///
/// # Errors
/// Propagates allocation and vertex range errors.
pub fn build_graph<D, T, S>(vertices: &VertexIndex, documents: D) -> Result<Graph>
where
    D: IntoIterator<Item = (Vertex, T)>,
    T: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut builder = GraphBuilder::new(vertices)?;
    for (source, tokens) in documents {
        builder.add_document(source, tokens)?;
    }
    Ok(builder.finish())
}
