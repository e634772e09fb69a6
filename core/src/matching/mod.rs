//! Valuation evaluation and maximum-weight matching
//!
//! Turns "agents and one partition" into "who gets which piece":
//! - [`graph`] - the evaluation table and the bipartite matching graph
//! - [`solver`] - the pluggable maximum-weight matching routine
//!
//! One graph is built per partition considered; matchings from different
//! partitions are compared only by total weight, never merged.

pub mod graph;
pub mod solver;

// Re-exports
pub use graph::{evaluate, GraphNode, MatchedPair, Matching, MatchingGraph};
pub use solver::{KuhnMunkresSolver, MatchingSolver};
