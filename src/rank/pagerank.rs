// src/rank/pagerank.rs
//! `PageRank` fixed-point iteration with in/out link-ratio weighting.
//!
//! Each in-neighbor `j` of `i` contributes
//! `prev[j] * (in(i) / in_sum(j)) * (out(i) / out_sum(j))`, where the sums run
//! over `j`'s out-neighbors and dangling vertices count 0.5 outgoing links.
//! The new score is `(1 - d) / n + d * sigma`. Iteration stops after
//! `max_iterations` passes or once the L1 change drops below the threshold.

use rayon::prelude::*;

use super::weights::LinkWeights;
use crate::graph::{Graph, Vertex};

const DAMPING: f64 = 0.85;
const THRESHOLD: f64 = 0.000_01;
const MAX_ITERATIONS: usize = 1000;

/// Result of a `PageRank` computation.
#[derive(Debug, Clone, PartialEq)]
pub struct PageRankResult {
    /// Scores indexed by vertex.
    pub scores: Vec<f64>,
    /// Number of full passes performed.
    pub iterations: usize,
    /// L1 change of the last pass.
    pub delta: f64,
    pub converged: bool,
}

impl PageRankResult {
    /// Score of `v`, or `None` if `v` is not a vertex of the ranked graph.
    #[must_use]
    pub fn score(&self, v: Vertex) -> Option<f64> {
        self.scores.get(v).copied()
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.scores.iter().sum()
    }
}

/// Rank engine settings.
#[derive(Debug, Clone)]
pub struct PageRank {
    pub damping: f64,
    pub threshold: f64,
    pub max_iterations: usize,
    /// Update vertices on the rayon pool. Results are identical either way.
    pub parallel: bool,
}

impl Default for PageRank {
    fn default() -> Self {
        Self {
            damping: DAMPING,
            threshold: THRESHOLD,
            max_iterations: MAX_ITERATIONS,
            parallel: false,
        }
    }
}

impl PageRank {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Runs the iteration on `graph`.
    ///
    /// The convergence check only happens after a full pass, so at least one
    /// pass runs whenever `max_iterations > 0`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn run(&self, graph: &Graph) -> PageRankResult {
        let n = graph.vertex_count();
        if n == 0 {
            return PageRankResult {
                scores: Vec::new(),
                iterations: 0,
                delta: 0.0,
                converged: true,
            };
        }

        let weights = LinkWeights::from_graph(graph);
        let n_f = n as f64;
        let teleport = (1.0 - self.damping) / n_f;
        let mut scores = vec![1.0 / n_f; n];
        let mut iterations = 0;
        let mut delta = self.threshold;

        while iterations < self.max_iterations && delta >= self.threshold {
            let prev = scores;
            scores = self.iterate_once(&prev, &weights, teleport);
            delta = l1_diff(&scores, &prev);
            iterations += 1;
        }

        PageRankResult {
            scores,
            iterations,
            delta,
            converged: delta < self.threshold,
        }
    }

    fn iterate_once(&self, prev: &[f64], weights: &LinkWeights, teleport: f64) -> Vec<f64> {
        let update = |i: Vertex| teleport + self.damping * incoming_rank(i, prev, weights);
        if self.parallel {
            (0..prev.len()).into_par_iter().map(update).collect()
        } else {
            (0..prev.len()).map(update).collect()
        }
    }
}

/// Computes scores with the given parameters and returns only the vector.
#[must_use]
pub fn calculate_page_rank(
    graph: &Graph,
    damping: f64,
    threshold: f64,
    max_iterations: usize,
) -> Vec<f64> {
    PageRank::new()
        .with_damping(damping)
        .with_threshold(threshold)
        .with_max_iterations(max_iterations)
        .run(graph)
        .scores
}

fn incoming_rank(target: Vertex, prev: &[f64], weights: &LinkWeights) -> f64 {
    let mut sigma = 0.0;
    for &source in weights.sources(target) {
        sigma += prev[source] * weights.w_in(target, source) * weights.w_out(target, source);
    }
    sigma
}

fn l1_diff(current: &[f64], prev: &[f64]) -> f64 {
    current
        .iter()
        .zip(prev)
        .map(|(new, old)| (new - old).abs())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incoming_rank_without_sources_is_zero() {
        let g = Graph::new(2).unwrap();
        let weights = LinkWeights::from_graph(&g);
        assert_eq!(incoming_rank(0, &[0.5, 0.5], &weights), 0.0);
    }

    #[test]
    fn test_l1_diff_sums_absolute_changes() {
        let d = l1_diff(&[0.25, 0.75], &[0.5, 0.5]);
        assert!((d - 0.5).abs() < 1e-12);
    }
}
