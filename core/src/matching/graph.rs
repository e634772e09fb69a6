//! Bipartite matching graph between agents and pieces
//!
//! Every auction algorithm reduces to the same question: which agent should
//! get which piece of one particular partition. This module holds the pieces
//! of that reduction:
//!
//! 1. `evaluate` - query every agent's valuation for every piece (the
//!    evaluation table)
//! 2. `MatchingGraph` - the weighted bipartite graph built from one table
//! 3. `Matching` / `MatchedPair` - solver output and its normalized form
//!
//! # Critical Invariants
//!
//! - One graph per partition. Pieces of different partitions can overlap in
//!   cake-range, so their graphs are never merged; each matching runs on the
//!   pieces of exactly one partition.
//! - The table and graph live for a single matching computation. Nothing here
//!   is cached across calls; agents are re-queried per partition.
//! - All indices are positions in the caller's agent slice and in the graph's
//!   piece list, so iteration order and results are deterministic.

use crate::models::{Agent, Piece};

/// Evaluation table: `table[a][p]` is agent `a`'s value for piece `p`.
///
/// Rebuilt for every partition an algorithm considers; never cached.
pub fn evaluate<A: Agent>(agents: &[A], pieces: &[Piece]) -> Vec<Vec<f64>> {
    agents
        .iter()
        .map(|agent| {
            pieces
                .iter()
                .map(|piece| agent.eval(piece.start(), piece.end()))
                .collect()
        })
        .collect()
}

/// A node of the matching graph: an agent or a piece, by index.
///
/// Solvers may report either endpoint of an edge first; carrying the node
/// kind in the value lets [`Matching::normalize`] destructure edges into
/// (agent, piece) pairs without guessing which side is which.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphNode {
    /// An agent, by position in the caller's agent slice
    Agent(usize),

    /// A piece, by position in the graph's partition
    Piece(usize),
}

/// A solver edge reduced to (agent index, piece index).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchedPair {
    /// Position in the caller's agent slice
    pub agent: usize,

    /// Position in the graph's partition
    pub piece: usize,
}

/// Raw solver output: a set of edges in solver-defined endpoint order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matching {
    edges: Vec<(GraphNode, GraphNode)>,
}

impl Matching {
    /// Wraps solver edges. Each node must appear in at most one edge; the
    /// solver guarantees that, and [`Matching::normalize`] relies on it.
    pub fn new(edges: Vec<(GraphNode, GraphNode)>) -> Self {
        Self { edges }
    }

    /// Edges as reported by the solver.
    pub fn edges(&self) -> &[(GraphNode, GraphNode)] {
        &self.edges
    }

    /// Number of matched pairs.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// True when the solver matched nothing.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Reorders every edge to (agent, piece) and sorts by agent index.
    ///
    /// # Panics
    ///
    /// Panics if an edge joins two nodes of the same kind; such an edge
    /// cannot come from a bipartite matching.
    pub fn normalize(&self) -> Vec<MatchedPair> {
        let mut pairs: Vec<MatchedPair> = self
            .edges
            .iter()
            .map(|edge| match *edge {
                (GraphNode::Agent(agent), GraphNode::Piece(piece))
                | (GraphNode::Piece(piece), GraphNode::Agent(agent)) => {
                    MatchedPair { agent, piece }
                }
                (a, b) => panic!("matching edge joins two nodes of the same kind: {a:?} - {b:?}"),
            })
            .collect();
        pairs.sort_by_key(|pair| pair.agent);
        pairs
    }
}

/// Weighted bipartite graph: agents on the left, one partition's pieces on
/// the right, edge weights from the evaluation table.
#[derive(Debug, Clone)]
pub struct MatchingGraph {
    /// Pieces of the partition this graph was built for
    pieces: Vec<Piece>,

    /// `weights[a][p]` = agent `a`'s value for piece `p`
    weights: Vec<Vec<f64>>,
}

impl MatchingGraph {
    /// Builds a graph from an already computed evaluation table.
    ///
    /// # Panics
    ///
    /// Panics if the table is not rectangular over `pieces` or contains a
    /// negative or non-finite weight.
    pub fn new(pieces: Vec<Piece>, weights: Vec<Vec<f64>>) -> Self {
        for row in &weights {
            assert_eq!(
                row.len(),
                pieces.len(),
                "evaluation table row length must equal the piece count"
            );
            assert!(
                row.iter().all(|w| w.is_finite() && *w >= 0.0),
                "valuations must be finite and nonnegative"
            );
        }
        Self { pieces, weights }
    }

    /// Builds the graph for `agents` over one partition, querying every
    /// (agent, piece) valuation.
    pub fn from_valuations<A: Agent>(agents: &[A], pieces: &[Piece]) -> Self {
        Self::new(pieces.to_vec(), evaluate(agents, pieces))
    }

    /// Number of agent nodes.
    pub fn num_agents(&self) -> usize {
        self.weights.len()
    }

    /// Number of piece nodes.
    pub fn num_pieces(&self) -> usize {
        self.pieces.len()
    }

    /// The partition this graph was built for.
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// The piece at `index`.
    pub fn piece(&self, index: usize) -> Piece {
        self.pieces[index]
    }

    /// Weight of the (agent, piece) edge.
    pub fn weight(&self, agent: usize, piece: usize) -> f64 {
        self.weights[agent][piece]
    }

    /// Total weight of a normalized matching on this graph.
    pub fn matching_weight(&self, pairs: &[MatchedPair]) -> f64 {
        pairs
            .iter()
            .map(|pair| self.weight(pair.agent, pair.piece))
            .sum()
    }
}
