// src/rank/mod.rs
pub mod ordering;
pub mod pagerank;
pub mod weights;

pub use ordering::{rank_order, ranked_rows, rows_for_graph, RankedRow};
pub use pagerank::{calculate_page_rank, PageRank, PageRankResult};

use crate::graph::{Graph, VertexIndex};

/// Orchestrates ranking and report ordering.
pub struct RankEngine;

impl RankEngine {
    /// Ranks `graph` and returns the scores plus report rows in ranked order.
    #[must_use]
    pub fn rank(
        settings: &PageRank,
        vertices: &VertexIndex,
        graph: &Graph,
    ) -> (PageRankResult, Vec<RankedRow>) {
        let result = settings.run(graph);
        let rows = rows_for_graph(vertices, graph, &result.scores);
        (result, rows)
    }
}
