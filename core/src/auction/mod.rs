//! Auction mechanisms
//!
//! The three truthful mechanisms, each a different answer to "what do we know
//! about piece boundaries":
//!
//! ```text
//! equally_sized_pieces   caller fixes one piece length      2-approximation
//! discrete_setting       caller fixes the piece sequence    log2(m) + 1
//! continuous_setting     nothing fixed; probe for cuts      O(log n)
//! ```
//!
//! All three run the same pipeline per candidate partition: build the
//! partition, evaluate every agent against every piece, solve one
//! maximum-weight matching, and keep the heaviest matching seen. The winning
//! matching becomes the returned [`Allocation`].
//!
//! # Critical Invariants
//!
//! - Inputs are validated before any oracle query; no partial results
//! - Matchings from different partitions compete by total weight only
//! - A run in which nobody values anything returns the empty allocation,
//!   which is a valid outcome, not an error

mod continuous;
mod discrete;
mod equal_pieces;

use thiserror::Error;

use crate::matching::{MatchedPair, MatchingGraph};
use crate::models::{Agent, Allocation, Piece};

// Re-exports
pub use continuous::{continuous_setting, continuous_setting_with};
pub use discrete::{discrete_setting, discrete_setting_with};
pub use equal_pieces::{equally_sized_pieces, equally_sized_pieces_with};

/// Errors that can occur when starting an auction
#[derive(Debug, Error, PartialEq)]
pub enum AuctionError {
    #[error("at least one agent is required")]
    NoAgents,

    #[error("at least {required} agents are required, got {actual}")]
    TooFewAgents { required: usize, actual: usize },

    #[error("piece size must be in (0, 1], got {piece_size}")]
    InvalidPieceSize { piece_size: f64 },

    #[error("piece sequence must not be empty")]
    EmptyPieces,

    #[error("piece {index} starts at {start} before the previous piece ends at {previous_end}")]
    UnorderedPieces {
        index: usize,
        start: f64,
        previous_end: f64,
    },
}

/// Rejects an empty agent list.
fn validate_agents<A: Agent>(agents: &[A]) -> Result<(), AuctionError> {
    if agents.is_empty() {
        return Err(AuctionError::NoAgents);
    }
    Ok(())
}

/// Rejects an empty, unordered, or overlapping piece sequence.
///
/// Gaps between consecutive pieces are fine; the mechanisms never assume a
/// partition covers the whole cake.
fn validate_pieces(pieces: &[Piece]) -> Result<(), AuctionError> {
    if pieces.is_empty() {
        return Err(AuctionError::EmptyPieces);
    }
    for (index, pair) in pieces.windows(2).enumerate() {
        if pair[1].start() < pair[0].end() {
            return Err(AuctionError::UnorderedPieces {
                index: index + 1,
                start: pair[1].start(),
                previous_end: pair[0].end(),
            });
        }
    }
    Ok(())
}

/// Converts a normalized matching on `graph` into the final [`Allocation`].
///
/// Matched agents become the chosen-agent sequence in ascending agent-index
/// order; each receives exactly its one matched piece, valued through its own
/// oracle. Unmatched agents are left out entirely.
pub fn allocation_from_matching<A: Agent>(
    agents: &[A],
    graph: &MatchingGraph,
    pairs: &[MatchedPair],
) -> Allocation {
    let chosen = pairs
        .iter()
        .map(|pair| agents[pair.agent].name().to_string())
        .collect();
    let mut allocation = Allocation::new(chosen);
    for (position, pair) in pairs.iter().enumerate() {
        allocation.set_piece(position, vec![graph.piece(pair.piece)], &agents[pair.agent]);
    }
    allocation
}
