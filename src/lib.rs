pub mod cli;
pub mod collection;
pub mod config;
pub mod error;
pub mod exit;
pub mod graph;
pub mod rank;
pub mod report;
