// src/graph/mod.rs
pub mod builder;
pub mod store;

pub use builder::{build_graph, GraphBuilder, VertexIndex};
pub use store::{Graph, Vertex, DANGLING_OUT_DEGREE};
