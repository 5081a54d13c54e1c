// src/rank/ordering.rs
//! Descending score order for reporting.

use crate::graph::{Graph, VertexIndex};

/// One line of the ranked report.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedRow {
    pub name: String,
    pub out_degree: usize,
    pub score: f64,
}

/// Vertex indices sorted by descending score.
///
/// The sort is stable: equal scores keep their input order.
#[must_use]
pub fn rank_order(scores: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));
    order
}

/// Builds report rows from index-aligned names, out-degrees and scores.
///
/// # Panics
/// Panics if the three slices differ in length.
#[must_use]
pub fn ranked_rows(names: &[String], out_degrees: &[usize], scores: &[f64]) -> Vec<RankedRow> {
    assert_eq!(names.len(), scores.len(), "names and scores must align");
    assert_eq!(out_degrees.len(), scores.len(), "out-degrees and scores must align");

    rank_order(scores)
        .into_iter()
        .map(|v| RankedRow {
            name: names[v].clone(),
            out_degree: out_degrees[v],
            score: scores[v],
        })
        .collect()
}

/// Report rows for a ranked graph, using true out-degrees.
#[must_use]
pub fn rows_for_graph(vertices: &VertexIndex, graph: &Graph, scores: &[f64]) -> Vec<RankedRow> {
    let out_degrees: Vec<usize> = (0..graph.vertex_count())
        .map(|v| graph.out_degree(v))
        .collect();
    ranked_rows(vertices.names(), &out_degrees, scores)
}
