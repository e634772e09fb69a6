//! Known-piece-sizes auction
//!
//! The caller fixes the piece sequence; the mechanism decides only how much
//! of it to merge. Each coarsening level `t` glues runs of `2^t` consecutive
//! pieces together:
//!
//! ```text
//! t = 0:   |--|--|--|--|--|--|--|--|      m pieces
//! t = 1:   |-----|-----|-----|-----|      floor(m/2) pieces
//! t = 2:   |-----------|-----------|      floor(m/4) pieces
//! ```
//!
//! Fine levels can serve many agents small pieces; coarse levels can serve
//! few agents large ones. Matching every level and keeping the heaviest
//! result bounds the welfare loss by a factor of `log2(m) + 1` at the cost of
//! O(log m) matching computations.

use log::debug;

use crate::auction::{allocation_from_matching, validate_agents, validate_pieces, AuctionError};
use crate::matching::{KuhnMunkresSolver, MatchedPair, MatchingGraph, MatchingSolver};
use crate::models::{Agent, Allocation, Piece};
use crate::partition::coarsen_partition;

/// Runs the known-piece-sizes auction with the default matching solver.
///
/// # Arguments
///
/// * `agents` - Participating agents (non-empty)
/// * `pieces` - Ordered, disjoint pieces in cake coordinates (non-empty)
///
/// # Returns
///
/// - `Ok(Allocation)` of the heaviest matching across all coarsening levels;
///   the empty allocation when no agent values any piece at any level
/// - `Err(AuctionError)` if the agent list is empty or the pieces are empty,
///   out of order, or overlapping
///
/// # Example
/// ```
/// use cake_auction_core::{discrete_setting, Piece, PiecewiseConstantAgent};
///
/// let agents = vec![
///     PiecewiseConstantAgent::new("Alice".to_string(), vec![100.0, 1.0]),
///     PiecewiseConstantAgent::new("Bob".to_string(), vec![2.0, 90.0]),
/// ];
/// let pieces = vec![Piece::new(0.0, 1.0), Piece::new(1.0, 2.0)];
/// let allocation = discrete_setting(&agents, &pieces).unwrap();
/// assert_eq!(allocation.total_value(), 190.0);
/// ```
pub fn discrete_setting<A: Agent>(
    agents: &[A],
    pieces: &[Piece],
) -> Result<Allocation, AuctionError> {
    discrete_setting_with(agents, pieces, &KuhnMunkresSolver)
}

/// Runs the known-piece-sizes auction with a caller-supplied matching solver.
pub fn discrete_setting_with<A: Agent, S: MatchingSolver>(
    agents: &[A],
    pieces: &[Piece],
    solver: &S,
) -> Result<Allocation, AuctionError> {
    validate_agents(agents)?;
    validate_pieces(pieces)?;

    let levels = pieces.len().ilog2();
    let mut best: Option<(f64, MatchingGraph, Vec<MatchedPair>)> = None;
    for t in 0..=levels {
        let coarsened = coarsen_partition(pieces, t);
        let graph = MatchingGraph::from_valuations(agents, &coarsened);
        let pairs = solver.max_weight_matching(&graph).normalize();
        let weight = graph.matching_weight(&pairs);
        debug!(
            "coarsening level {t}: {} pieces, matched weight {weight}",
            graph.num_pieces()
        );

        // Strictly heavier only: on ties the finest level found first stays.
        let improved = match &best {
            None => weight > 0.0,
            Some((best_weight, _, _)) => weight > *best_weight,
        };
        if improved {
            debug!("coarsening level {t} is the best so far");
            best = Some((weight, graph, pairs));
        }
    }

    match best {
        Some((_, graph, pairs)) => Ok(allocation_from_matching(agents, &graph, &pairs)),
        None => Ok(Allocation::empty()),
    }
}
