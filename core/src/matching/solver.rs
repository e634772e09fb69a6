//! Maximum-weight matching solvers
//!
//! The auction algorithms treat maximum-weight matching as an external
//! routine behind the [`MatchingSolver`] trait: they hand over a
//! [`MatchingGraph`] and get back edges, nothing more. The bundled
//! [`KuhnMunkresSolver`] binds the `pathfinding` crate's assignment
//! implementation; swapping in a different routine (for example a
//! bipartite-specialized one) only means implementing the trait.
//!
//! # Solver Contract
//!
//! - Returned edges form a matching: each agent and each piece appears in at
//!   most one edge
//! - Total edge weight is maximal among all matchings of the graph
//! - The matching need not be perfect; an edge of zero weight is never
//!   reported, so a graph whose valuations are all zero yields an empty
//!   matching
//! - Endpoint order within an edge is solver-defined; callers normalize via
//!   [`Matching::normalize`]

use log::trace;
use ordered_float::OrderedFloat;
use pathfinding::prelude::{kuhn_munkres, Matrix};

use crate::matching::graph::{GraphNode, Matching, MatchingGraph};

/// A maximum-weight matching routine over one [`MatchingGraph`].
pub trait MatchingSolver {
    /// Computes a maximum-weight matching of `graph`.
    fn max_weight_matching(&self, graph: &MatchingGraph) -> Matching;
}

/// Kuhn-Munkres (Hungarian) assignment from the `pathfinding` crate.
///
/// The assignment routine wants a rectangular weight matrix with at least as
/// many columns as rows, and matches every row. This adapter orients the
/// matrix so the smaller side of the graph indexes the rows, runs the
/// assignment, and drops zero-weight pairings so the result is a matching in
/// the auction sense rather than a forced-total assignment.
#[derive(Debug, Clone, Copy, Default)]
pub struct KuhnMunkresSolver;

impl MatchingSolver for KuhnMunkresSolver {
    fn max_weight_matching(&self, graph: &MatchingGraph) -> Matching {
        let num_agents = graph.num_agents();
        let num_pieces = graph.num_pieces();
        if num_agents == 0 || num_pieces == 0 {
            return Matching::new(Vec::new());
        }

        // Rows must not outnumber columns; flip the matrix when they would.
        let transposed = num_agents > num_pieces;
        let (rows, cols) = if transposed {
            (num_pieces, num_agents)
        } else {
            (num_agents, num_pieces)
        };

        let cells: Vec<Vec<OrderedFloat<f64>>> = (0..rows)
            .map(|row| {
                (0..cols)
                    .map(|col| {
                        let (agent, piece) = if transposed { (col, row) } else { (row, col) };
                        OrderedFloat(graph.weight(agent, piece))
                    })
                    .collect()
            })
            .collect();
        let weights = Matrix::from_rows(cells).expect("weight rows share one length");

        let (total, assignment) = kuhn_munkres(&weights);
        trace!(
            "kuhn-munkres on {}x{} matrix (transposed: {}) matched weight {}",
            rows,
            cols,
            transposed,
            total.into_inner()
        );

        let mut edges = Vec::with_capacity(assignment.len());
        for (row, col) in assignment.into_iter().enumerate() {
            let (agent, piece) = if transposed { (col, row) } else { (row, col) };
            if graph.weight(agent, piece) <= 0.0 {
                continue;
            }
            // Endpoint order follows matrix orientation; normalize() sorts it out.
            let edge = if transposed {
                (GraphNode::Piece(piece), GraphNode::Agent(agent))
            } else {
                (GraphNode::Agent(agent), GraphNode::Piece(piece))
            };
            edges.push(edge);
        }
        Matching::new(edges)
    }
}
