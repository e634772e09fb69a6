//! Continuous auction
//!
//! Nothing about piece boundaries is known up front. The mechanism buys that
//! knowledge from the agents themselves:
//!
//! 1. Sample `floor(n/2)` agents (with replacement) into a probe set `S`
//! 2. Each probed agent walks the cake from 0 in steps worth `1/(2n)` of its
//!    total value, reporting where each step ends
//! 3. The reported positions, rounded to 4 decimals and unioned with 0,
//!    become the boundaries of an induced partition `J`
//! 4. The agents outside `S` compete for `J`'s pieces in the discrete auction
//!
//! Probed agents reveal a sketch of their density and are excluded from the
//! allocation; the rest are matched on a partition that already reflects
//! where value concentrates, which is what yields the O(log n) bound.
//!
//! Randomness comes from an explicitly passed [`RngManager`], so a fixed seed
//! reproduces the probe set and with it the whole run.

use std::collections::BTreeSet;

use log::debug;

use crate::auction::{discrete_setting_with, AuctionError};
use crate::matching::{KuhnMunkresSolver, MatchingSolver};
use crate::models::{Agent, Allocation, Piece};
use crate::rng::RngManager;

/// Positions reported by probes are kept to 4 decimal places, which caps how
/// many distinct boundaries the induced partition can accumulate.
fn round_position(position: f64) -> f64 {
    (position * 10_000.0).round() / 10_000.0
}

/// Runs the continuous auction with the default matching solver.
///
/// # Arguments
///
/// * `agents` - Participating agents; at least two, so that the probe set and
///   the remaining pool are both non-empty
/// * `rng` - Random source for probe selection; same seed, same outcome
///
/// # Returns
///
/// - `Ok(Allocation)` over the non-probed agents
/// - `Err(AuctionError)` if fewer than two agents participate
///
/// # Example
/// ```
/// use cake_auction_core::{continuous_setting, PiecewiseConstantAgent, RngManager};
///
/// let agents = vec![
///     PiecewiseConstantAgent::new("Alice".to_string(), vec![100.0, 1.0]),
///     PiecewiseConstantAgent::new("Bob".to_string(), vec![100.0, 1.0]),
/// ];
/// let mut rng = RngManager::new(42);
/// let allocation = continuous_setting(&agents, &mut rng).unwrap();
/// assert_eq!(allocation.total_value(), 101.0);
/// ```
pub fn continuous_setting<A: Agent>(
    agents: &[A],
    rng: &mut RngManager,
) -> Result<Allocation, AuctionError> {
    continuous_setting_with(agents, rng, &KuhnMunkresSolver)
}

/// Runs the continuous auction with a caller-supplied matching solver.
pub fn continuous_setting_with<A: Agent, S: MatchingSolver>(
    agents: &[A],
    rng: &mut RngManager,
    solver: &S,
) -> Result<Allocation, AuctionError> {
    let n = agents.len();
    if n < 2 {
        return Err(AuctionError::TooFewAgents {
            required: 2,
            actual: n,
        });
    }

    // Probe set: floor(n/2) draws with replacement; duplicate draws collapse,
    // they neither probe twice nor exclude anyone twice.
    let mut probes: BTreeSet<usize> = BTreeSet::new();
    for _ in 0..n / 2 {
        probes.insert(rng.sample_index(n));
    }
    debug!("probing {} of {} agents", probes.len(), n);

    // Each probed agent reports boundaries of consecutive ranges worth
    // 1/(2n) of its total value. 2n steps exhaust the whole value, so the
    // walk is capped there; mark returning None ends it early.
    let max_marks = 2 * n;
    let mut boundaries = vec![0.0];
    for &index in &probes {
        let agent = &agents[index];
        let step_value = agent.cake_value() / (2 * n) as f64;
        let mut start = 0.0;
        for _ in 0..max_marks {
            match agent.mark(start, step_value) {
                Some(position) => {
                    let position = round_position(position);
                    boundaries.push(position);
                    start = position;
                }
                None => break,
            }
        }
    }

    boundaries.sort_by(f64::total_cmp);
    boundaries.dedup();
    let pieces: Vec<Piece> = boundaries
        .windows(2)
        .map(|pair| Piece::new(pair[0], pair[1]))
        .collect();
    debug!("probe boundaries induced {} pieces", pieces.len());

    let remaining: Vec<&A> = agents
        .iter()
        .enumerate()
        .filter(|(index, _)| !probes.contains(index))
        .map(|(_, agent)| agent)
        .collect();
    discrete_setting_with(&remaining, &pieces, solver)
}
