//! Cake Auction Core - Truthful Allocation Engine
//!
//! Approximation algorithms for auctioning a single heterogeneous divisible
//! resource ("cake") among agents with private valuations. The mechanisms
//! elicit only a bounded number of value and boundary queries per agent, so
//! no agent can gain by misreporting.
//!
//! # Architecture
//!
//! - **models**: Domain types (Agent oracle, Piece, Allocation)
//! - **partition**: Tiling construction and power-of-two coarsening
//! - **matching**: Valuation evaluation, bipartite graphs, matching solvers
//! - **auction**: The three mechanisms (uniform-piece, discrete, continuous)
//! - **rng**: Deterministic random number generation
//!
//! # Critical Invariants
//!
//! 1. Valuations are queried through the [`Agent`] trait, never inspected
//! 2. All randomness is deterministic (seeded RNG, explicitly passed)
//! 3. Nothing is cached across calls; each run stands alone

// Module declarations
pub mod auction;
pub mod matching;
pub mod models;
pub mod partition;
pub mod rng;

// Re-exports for convenience
pub use auction::{
    allocation_from_matching, continuous_setting, continuous_setting_with, discrete_setting,
    discrete_setting_with, equally_sized_pieces, equally_sized_pieces_with, AuctionError,
};
pub use matching::{
    evaluate, GraphNode, KuhnMunkresSolver, MatchedPair, Matching, MatchingGraph, MatchingSolver,
};
pub use models::{
    agent::{Agent, PiecewiseConstantAgent},
    allocation::{Allocation, AllocationEntry},
    piece::Piece,
};
pub use partition::{coarsen_partition, create_partition};
pub use rng::RngManager;
