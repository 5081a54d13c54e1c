// src/rank/weights.rs
//! Degree and link-sum tables for one rank computation.
//!
//! The graph does not change while ranks are computed, so every aggregate is
//! read from the matrix once up front instead of inside the inner loop.

use crate::graph::{Graph, Vertex};

pub struct LinkWeights {
    in_links: Vec<f64>,
    out_links: Vec<f64>,
    in_sums: Vec<f64>,
    out_sums: Vec<f64>,
    sources: Vec<Vec<Vertex>>,
}

impl LinkWeights {
    #[must_use]
    pub fn from_graph(graph: &Graph) -> Self {
        let n = graph.vertex_count();
        let in_links: Vec<f64> = (0..n).map(|v| graph.num_in_links(v)).collect();
        let out_links: Vec<f64> = (0..n).map(|v| graph.num_out_links(v)).collect();

        // Summed in successor order, same as Graph::in_link_sum / out_link_sum.
        let in_sums: Vec<f64> = (0..n)
            .map(|v| graph.successors(v).map(|w| in_links[w]).sum::<f64>())
            .collect();
        let out_sums: Vec<f64> = (0..n)
            .map(|v| graph.successors(v).map(|w| out_links[w]).sum::<f64>())
            .collect();
        let sources: Vec<Vec<Vertex>> = (0..n).map(|v| graph.predecessors(v).collect()).collect();

        Self {
            in_links,
            out_links,
            in_sums,
            out_sums,
            sources,
        }
    }

    /// In-neighbors of `target`, ascending.
    #[must_use]
    pub fn sources(&self, target: Vertex) -> &[Vertex] {
        &self.sources[target]
    }

    /// `in_links(target) / in_link_sum(source)`.
    #[must_use]
    pub fn w_in(&self, target: Vertex, source: Vertex) -> f64 {
        self.in_links[target] / self.in_sums[source]
    }

    /// `out_links(target) / out_link_sum(source)`.
    #[must_use]
    pub fn w_out(&self, target: Vertex, source: Vertex) -> f64 {
        self.out_links[target] / self.out_sums[source]
    }
}
