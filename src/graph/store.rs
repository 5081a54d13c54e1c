// src/graph/store.rs
//! Dense directed graph over a fixed set of integer-indexed vertices.
//!
//! Edges live in a single row-major `n × n` weight matrix. A zero cell means
//! "no edge"; any positive value is the edge weight. Vertices are never added
//! or removed after construction, so indices stay stable for the lifetime of
//! the graph and the matrix is freed as a whole when the graph is dropped.

use crate::error::{RankError, Result};

/// A document, identified by its position in the collection.
pub type Vertex = usize;

/// Out-degree reported for vertices with no outgoing edges.
///
/// Stands in for zero so the rank weighting never divides by it.
pub const DANGLING_OUT_DEGREE: f64 = 0.5;

#[derive(Debug, Clone)]
pub struct Graph {
    n_v: usize,
    n_e: usize,
    edges: Vec<u32>,
    dangling_out_degree: f64,
}

impl Graph {
    /// Allocates an all-zero `n × n` matrix.
    ///
    /// # Errors
    /// Returns `RankError::Allocation` if the matrix size overflows or the
    /// allocator cannot satisfy the request.
    pub fn new(n_v: usize) -> Result<Self> {
        let cells = n_v
            .checked_mul(n_v)
            .ok_or(RankError::Allocation { vertices: n_v })?;
        let mut edges = Vec::new();
        edges
            .try_reserve_exact(cells)
            .map_err(|_| RankError::Allocation { vertices: n_v })?;
        edges.resize(cells, 0);

        Ok(Self {
            n_v,
            n_e: 0,
            edges,
            dangling_out_degree: DANGLING_OUT_DEGREE,
        })
    }

    /// Overrides the out-degree substituted for dangling vertices.
    #[must_use]
    pub fn with_dangling_out_degree(mut self, value: f64) -> Self {
        self.dangling_out_degree = value;
        self
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.n_v
    }

    /// Number of distinct directed edges recorded so far.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.n_e
    }

    #[must_use]
    pub fn is_valid(&self, v: Vertex) -> bool {
        v < self.n_v
    }

    /// Records the edge `v -> w` with the given weight.
    ///
    /// Self-loops and already present edges are ignored; the first weight
    /// inserted for a pair is kept. Returns whether a new edge was stored.
    ///
    /// # Errors
    /// Returns `RankError::InvalidVertex` for an out-of-range endpoint and
    /// `RankError::InvalidParameter` for a zero weight.
    pub fn insert_edge(&mut self, v: Vertex, w: Vertex, weight: u32) -> Result<bool> {
        self.check_vertex(v)?;
        self.check_vertex(w)?;
        if weight == 0 {
            return Err(RankError::InvalidParameter {
                name: "weight",
                reason: "edge weight must be positive".to_string(),
            });
        }
        if v == w {
            return Ok(false);
        }

        let idx = v * self.n_v + w;
        if self.edges[idx] != 0 {
            return Ok(false);
        }
        self.edges[idx] = weight;
        self.n_e += 1;
        Ok(true)
    }

    /// True iff there is an edge `v -> w`.
    ///
    /// # Panics
    /// Panics if either vertex is out of range; check with [`Graph::is_valid`].
    #[must_use]
    pub fn is_connected(&self, v: Vertex, w: Vertex) -> bool {
        self.row(v)[w] != 0
    }

    /// Stored weight of `v -> w`, zero when absent.
    #[must_use]
    pub fn weight(&self, v: Vertex, w: Vertex) -> u32 {
        self.row(v)[w]
    }

    /// Vertices `v` links to, in index order.
    pub fn successors(&self, v: Vertex) -> impl Iterator<Item = Vertex> + '_ {
        self.row(v)
            .iter()
            .enumerate()
            .filter(|(_, &cell)| cell != 0)
            .map(|(w, _)| w)
    }

    /// Vertices linking to `v`, in index order.
    pub fn predecessors(&self, v: Vertex) -> impl Iterator<Item = Vertex> + '_ {
        assert!(self.is_valid(v), "vertex {v} out of range");
        (0..self.n_v).filter(move |&u| self.row(u)[v] != 0)
    }

    /// True count of outgoing edges, without the dangling substitution.
    #[must_use]
    pub fn out_degree(&self, v: Vertex) -> usize {
        self.successors(v).count()
    }

    #[must_use]
    pub fn in_degree(&self, v: Vertex) -> usize {
        self.predecessors(v).count()
    }

    /// Out-degree as used by the rank weighting.
    ///
    /// A vertex with no outgoing edges reports the dangling sentinel
    /// (0.5 by default) instead of zero.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn num_out_links(&self, v: Vertex) -> f64 {
        match self.out_degree(v) {
            0 => self.dangling_out_degree,
            n => n as f64,
        }
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn num_in_links(&self, v: Vertex) -> f64 {
        self.in_degree(v) as f64
    }

    /// Sum of the in-degrees of every vertex `v` links to.
    #[must_use]
    pub fn in_link_sum(&self, v: Vertex) -> f64 {
        self.successors(v).map(|w| self.num_in_links(w)).sum()
    }

    /// Sum of the weighting out-degrees of every vertex `v` links to.
    ///
    /// Dangling targets contribute the sentinel value.
    #[must_use]
    pub fn out_link_sum(&self, v: Vertex) -> f64 {
        self.successors(v).map(|w| self.num_out_links(w)).sum()
    }

    fn row(&self, v: Vertex) -> &[u32] {
        &self.edges[v * self.n_v..(v + 1) * self.n_v]
    }

    fn check_vertex(&self, v: Vertex) -> Result<()> {
        if self.is_valid(v) {
            Ok(())
        } else {
            Err(RankError::InvalidVertex {
                vertex: v,
                count: self.n_v,
            })
        }
    }
}
