//! Uniform-piece auction
//!
//! The caller fixes a single piece length `l`; the mechanism lays two tilings
//! of that length over the cake and keeps whichever supports the heavier
//! matching:
//!
//! ```text
//! offset 0:   |----|----|----|..     (floor(1/l) pieces)
//! offset δ:   ..|----|----|----|     δ = 1 - floor(1/l)·l
//! ```
//!
//! A single tiling can split every agent's favorite region across two pieces;
//! the shifted tiling puts those boundaries elsewhere, and the better of the
//! two matchings is within a factor 2 of the optimum. Each agent is asked for
//! O(1/l) values and nothing else.

use log::debug;

use crate::auction::{allocation_from_matching, validate_agents, AuctionError};
use crate::matching::{KuhnMunkresSolver, MatchingGraph, MatchingSolver};
use crate::models::{Agent, Allocation, Piece};
use crate::partition::create_partition;

/// Runs the uniform-piece auction with the default matching solver.
///
/// # Arguments
///
/// * `agents` - Participating agents (non-empty)
/// * `piece_size` - Piece length on the normalized `[0, 1]` domain, in `(0, 1]`
///
/// # Returns
///
/// - `Ok(Allocation)` assigning at most one piece per chosen agent
/// - `Err(AuctionError)` if the agent list is empty or `piece_size` is
///   outside `(0, 1]`
///
/// # Example
/// ```
/// use cake_auction_core::{equally_sized_pieces, PiecewiseConstantAgent};
///
/// let agents = vec![
///     PiecewiseConstantAgent::new("Alice".to_string(), vec![100.0, 1.0]),
///     PiecewiseConstantAgent::new("Bob".to_string(), vec![2.0, 90.0]),
/// ];
/// let allocation = equally_sized_pieces(&agents, 0.5).unwrap();
/// assert_eq!(allocation.total_value(), 190.0);
/// ```
pub fn equally_sized_pieces<A: Agent>(
    agents: &[A],
    piece_size: f64,
) -> Result<Allocation, AuctionError> {
    equally_sized_pieces_with(agents, piece_size, &KuhnMunkresSolver)
}

/// Runs the uniform-piece auction with a caller-supplied matching solver.
pub fn equally_sized_pieces_with<A: Agent, S: MatchingSolver>(
    agents: &[A],
    piece_size: f64,
    solver: &S,
) -> Result<Allocation, AuctionError> {
    validate_agents(agents)?;
    if !(piece_size > 0.0 && piece_size <= 1.0) {
        return Err(AuctionError::InvalidPieceSize { piece_size });
    }

    // Offset of the second tiling: the slack left after laying floor(1/l)
    // pieces from 0. Clamped because the product can round a hair above 1.
    let delta = (1.0 - (1.0 / piece_size).floor() * piece_size).max(0.0);

    // Tilings are built on [0, 1] and stretched to the cake's native
    // coordinates before any agent is asked for a value.
    let length = agents
        .iter()
        .map(Agent::cake_length)
        .fold(f64::MIN, f64::max);

    let match_tiling = |offset: f64| {
        let tiling: Vec<Piece> = create_partition(piece_size, offset)
            .iter()
            .map(|piece| piece.scaled(length))
            .collect();
        let graph = MatchingGraph::from_valuations(agents, &tiling);
        let pairs = solver.max_weight_matching(&graph).normalize();
        let weight = graph.matching_weight(&pairs);
        debug!(
            "tiling at offset {offset}: {} pieces, matched weight {weight}",
            graph.num_pieces()
        );
        (graph, pairs, weight)
    };

    let (graph_zero, pairs_zero, weight_zero) = match_tiling(0.0);
    let (graph_delta, pairs_delta, weight_delta) = match_tiling(delta);

    // Ties keep the unshifted tiling.
    let (graph, pairs) = if weight_delta > weight_zero {
        (graph_delta, pairs_delta)
    } else {
        (graph_zero, pairs_zero)
    };
    Ok(allocation_from_matching(agents, &graph, &pairs))
}
